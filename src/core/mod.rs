pub mod config;
pub mod constants;
pub mod field;
pub mod interaction;
pub mod paint;
pub mod particles;
pub mod projection;

pub use config::*;
pub use field::ParticleField;
pub use paint::{Hsl, Painter};
pub use projection::Viewport;
