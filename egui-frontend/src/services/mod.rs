//! Data access for the dashboard: the REST client and the per-resource
//! loaders that drive it from the UI.

pub mod api;
pub mod dashboard_data;
pub mod resource_loader;

pub use api::{ApiClient, DashboardApi};
pub use dashboard_data::DashboardData;
pub use resource_loader::Resource;
