pub mod constants;
pub mod effect;
pub mod palette;
pub mod particle;
pub mod scene;
pub mod shape;
pub mod sound;
pub mod star;
pub mod viewport;

pub use effect::*;
pub use palette::*;
pub use particle::*;
pub use scene::*;
pub use shape::*;
pub use sound::*;
pub use star::*;
pub use viewport::*;
