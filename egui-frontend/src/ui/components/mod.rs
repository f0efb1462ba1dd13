//! # UI Components Module
//!
//! Each submodule renders one part of the dashboard, mostly as `impl
//! DashboardApp` blocks so components can read the shared state directly.
//!
//! ## Module Organization:
//! - `styling` - colors, global style and small shared widgets
//! - `header` - title bar, navigation labels, refresh and avatar
//! - `wallet_summary` - available balance and the stat cards
//! - `revenue_chart` - daily revenue line chart
//! - `transaction_list` - filtered list with its toolbar and empty state
//! - `filter_panel` - side panel for editing filters

pub mod filter_panel;
pub mod header;
pub mod revenue_chart;
pub mod styling;
pub mod transaction_list;
pub mod wallet_summary;

pub use styling::setup_dashboard_style;
