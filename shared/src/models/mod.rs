//! Domain models for the VanSuraksha fire risk platform

mod contact;
mod region;
mod risk;

pub use contact::*;
pub use region::*;
pub use risk::*;
