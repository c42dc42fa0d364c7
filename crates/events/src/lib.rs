pub mod event;
pub mod feed;
pub mod heat;
pub mod stats;

pub use event::*;
pub use feed::*;
pub use heat::*;
pub use stats::*;
