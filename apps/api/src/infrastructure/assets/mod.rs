pub mod file_overlay_provider;
pub mod memory_overlay_provider;
pub mod traits;
