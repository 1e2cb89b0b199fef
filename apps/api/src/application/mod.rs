pub mod create_composite;
pub mod verify_phone;
