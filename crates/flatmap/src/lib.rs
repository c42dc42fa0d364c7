pub mod compose;
pub mod heat_fill;
pub mod overlay;

pub use compose::*;
pub use heat_fill::*;
pub use overlay::*;
