pub mod params;
pub mod render;
