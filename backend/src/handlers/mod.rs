//! HTTP request handlers for the VanSuraksha platform

pub mod contact;
pub mod dashboard;
pub mod health;
pub mod prediction;
pub mod region;

pub use contact::*;
pub use dashboard::*;
pub use health::*;
pub use prediction::*;
pub use region::*;
