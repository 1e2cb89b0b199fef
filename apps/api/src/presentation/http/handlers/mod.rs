pub mod composite;
pub mod health;
pub mod otp;
