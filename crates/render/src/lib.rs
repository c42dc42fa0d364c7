pub mod command;
pub mod surface;

pub use command::*;
pub use surface::*;
