pub mod confetti;
pub mod constants;
pub mod curve;
pub mod director;
pub mod palette;
pub mod ribbon;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use confetti::*;
pub use constants::*;
pub use curve::*;
pub use director::*;
pub use palette::*;
pub use ribbon::*;
pub use state::*;
