//! App-level tests
//!
//! Tests are organized by topic:
//! - `keys` - Key handling through the full component chain
//! - `render` - Whole-frame rendering against a test backend

mod keys;

use distplot_core::{DistributionKind, PlotConfig};

use crate::App;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;

fn app() -> App {
    app_starting_at(DistributionKind::Normal)
}

fn app_starting_at(kind: DistributionKind) -> App {
    let plots = PlotConfig::default().build_plots().unwrap();
    App::new(AppState::new(plots, kind, KeybindingsConfig::default()))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(&AppKeyEvent::new(code));
}

fn press_shift(app: &mut App, code: KeyCode) {
    app.handle_key_event(&AppKeyEvent::new(code).with_shift());
}
