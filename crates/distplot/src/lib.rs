//! Terminal front end for `distplot_core`.
//!
//! Shows one tab per distribution with its density curve and a slider per
//! parameter. Moving a slider recomputes the curve immediately.

pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod state;
pub mod util;

#[cfg(test)]
mod tests;

pub use app::App;
pub use logging::init_logging;
