pub mod escape;
pub mod pgm;
pub mod renderer;
