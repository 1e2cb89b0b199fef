pub mod entity;
pub mod errors;
