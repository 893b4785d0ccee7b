//! Business logic services for the VanSuraksha platform

pub mod contact;
pub mod dashboard;
pub mod prediction;
pub mod region;

pub use contact::ContactService;
pub use dashboard::DashboardService;
pub use prediction::PredictionService;
pub use region::RegionService;
