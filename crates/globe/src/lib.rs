pub mod hit;
pub mod landmass;
pub mod reveal;
pub mod sphere;
pub mod state;
pub mod view;

pub use hit::*;
pub use landmass::*;
pub use reveal::*;
pub use sphere::*;
pub use state::*;
pub use view::*;
