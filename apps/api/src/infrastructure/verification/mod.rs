pub mod traits;
pub mod twilio_verify_service;
pub mod unconfigured;
