//! Terminal front end for the finwheel category breakdown.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::{App, LaunchOptions};
pub use logging::init_logging;
