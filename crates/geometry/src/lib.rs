pub mod heat_ramp;
pub mod marker;
pub mod rings;
pub mod severity;

pub use heat_ramp::*;
pub use marker::*;
pub use rings::*;
pub use severity::*;
