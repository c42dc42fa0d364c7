pub mod ortho;
pub mod precision;
pub mod vec;

pub use ortho::*;
pub use precision::*;
pub use vec::*;
