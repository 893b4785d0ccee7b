//! Shared types and logic for the VanSuraksha fire risk platform
//!
//! This crate contains the risk classifier, the static regional sample
//! store and the types shared between the backend and the browser (via WASM).

pub mod lenient;
pub mod models;
pub mod store;
pub mod types;
pub mod validation;

pub use models::*;
pub use store::*;
pub use types::*;
pub use validation::*;
