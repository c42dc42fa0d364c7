pub mod clock;
pub mod frame;
pub mod pulse;

pub use clock::*;
pub use frame::*;
pub use pulse::*;
