pub mod display;
pub mod params;
pub mod parts;

pub use display::*;
pub use params::*;
pub use parts::*;
