pub mod camera;
pub mod constants;
pub mod snow;
pub mod sprite;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use snow::*;
pub use viewport::*;
