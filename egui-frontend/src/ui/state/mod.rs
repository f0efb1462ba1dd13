//! UI-only state that lives alongside the loaded data.

pub mod filter_state;

pub use filter_state::{BoundControl, FilterPanelState};
