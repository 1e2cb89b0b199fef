pub mod errors;
pub mod geometry;
pub mod params;
