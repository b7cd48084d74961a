pub mod autoplay;
pub mod color;
pub mod constants;
pub mod field;
pub mod particle;
pub mod stimulus;

pub use autoplay::*;
pub use color::*;
pub use field::*;
pub use particle::*;
pub use stimulus::*;
