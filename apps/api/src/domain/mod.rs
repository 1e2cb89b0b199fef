pub mod composite;
pub mod verification;
