//! Full-screen incident dashboard
//!
//! - `model` - pure UI state, key mapping and reducer
//! - `view` - the iocraft component wiring the model to a [`Dashboard`](crate::dashboard::Dashboard)
//! - `components` - header, metrics, filter bar, table, chat and footer widgets

pub mod components;
pub mod model;
pub mod theme;
pub mod view;

pub use model::{DashboardAction, DashboardState, Focus};
pub use theme::Theme;
pub use view::{SlaDashboard, SlaDashboardProps};
