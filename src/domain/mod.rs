pub mod demand;
pub mod flight;
pub mod gse;
pub mod projection;

pub use demand::*;
pub use flight::*;
pub use gse::*;
pub use projection::*;
