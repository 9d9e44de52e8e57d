//! Key handling tests
//!
//! These tests verify that:
//! - Global bindings (quit, cancel) win over component bindings
//! - Tab keys switch plots and slider keys only touch the active plot
//! - Keyboard stepping reaches the exact-zero Pareto shape
//! - Sliders driven into invalid territory never panic

use distplot_core::{DistributionKind, PlotConfig, genpareto_pdf};

use super::{app, app_starting_at, press, press_shift};
use crate::App;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;

fn mean(a: &App) -> f64 {
    a.state().active_plot().controls()[0].value()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_quit_bindings() {
    let mut a = app();
    press(&mut a, KeyCode::Char('q'));
    assert!(a.state().exit);

    let mut a = app();
    a.handle_key_event(&AppKeyEvent::new(KeyCode::Char('c')).with_ctrl());
    assert!(a.state().exit);
}

#[test]
fn test_tab_keys() {
    let mut a = app();
    press(&mut a, KeyCode::Char('4'));
    assert_eq!(a.state().active_tab, DistributionKind::Pareto);

    press(&mut a, KeyCode::Tab);
    assert_eq!(a.state().active_tab, DistributionKind::Normal);

    press_shift(&mut a, KeyCode::BackTab);
    assert_eq!(a.state().active_tab, DistributionKind::Pareto);

    press(&mut a, KeyCode::Char('3'));
    assert_eq!(a.state().active_plot().title(), "Gamma Distribution");
}

#[test]
fn test_pareto_shape_steps_down_to_exact_zero() {
    let mut a = app_starting_at(DistributionKind::Pareto);
    assert_eq!(a.state().selected(), 0);

    for _ in 0..8 {
        press(&mut a, KeyCode::Char('h'));
    }

    let plot = a.state().active_plot();
    assert_eq!(plot.controls()[0].value(), 0.0);
    for (x, y) in plot.line().points() {
        assert_eq!(y.to_bits(), genpareto_pdf(x, 0.0, 1.0, 1.0).to_bits());
    }
}

#[test]
fn test_fine_and_coarse_steps() {
    let mut a = app();
    // mean spans 10 over 100 ticks
    press(&mut a, KeyCode::Right);
    assert_close(mean(&a), 1.1);

    press_shift(&mut a, KeyCode::Char('H'));
    assert_close(mean(&a), 0.1);

    press_shift(&mut a, KeyCode::Right);
    assert_close(mean(&a), 1.1);

    for _ in 0..20 {
        press_shift(&mut a, KeyCode::Right);
    }
    assert_eq!(mean(&a), 5.0);
}

#[test]
fn test_selection_moves_between_sliders() {
    let mut a = app();
    press(&mut a, KeyCode::Char('j'));
    assert_eq!(a.state().selected(), 1);

    press(&mut a, KeyCode::Left);
    let plot = a.state().active_plot();
    assert_eq!(plot.controls()[0].value(), 1.0);
    let std_dev = plot.controls()[1].value();
    assert!(std_dev < 1.0 && std_dev > 0.9, "std_dev = {std_dev}");

    press(&mut a, KeyCode::Up);
    assert_eq!(a.state().selected(), 0);
}

#[test]
fn test_slider_keys_only_touch_active_plot() {
    let mut a = app();
    let gamma_before = a.state().plots[DistributionKind::Gamma.index()]
        .line()
        .ys()
        .to_vec();

    press(&mut a, KeyCode::Char('l'));
    press(&mut a, KeyCode::Char('j'));
    press(&mut a, KeyCode::Char('l'));

    assert_eq!(
        a.state().plots[DistributionKind::Gamma.index()].line().ys(),
        gamma_before.as_slice()
    );
}

#[test]
fn test_gamma_scale_through_zero_does_not_panic() {
    let mut a = app_starting_at(DistributionKind::Gamma);
    press(&mut a, KeyCode::Down);
    for _ in 0..15 {
        press_shift(&mut a, KeyCode::Left);
    }

    let plot = a.state().active_plot();
    assert_eq!(plot.controls()[1].value(), -5.0);
    assert_eq!(plot.line().len(), 1000);
    assert!(!plot.line().has_finite_points());
}

#[test]
fn test_reset_key() {
    let mut a = app();
    press(&mut a, KeyCode::Char('l'));
    press(&mut a, KeyCode::Char('j'));
    press(&mut a, KeyCode::Char('l'));
    press(&mut a, KeyCode::Char('r'));

    let plot = a.state().active_plot();
    assert_eq!(plot.parameters().values(), &[1.0, 1.0]);
}

#[test]
fn test_escape_clears_error() {
    let plots = PlotConfig::default().build_plots().unwrap();
    let mut state = AppState::new(plots, DistributionKind::Normal, KeybindingsConfig::default());
    state.set_error("something went wrong".into());
    let mut a = App::new(state);

    press(&mut a, KeyCode::Esc);
    assert!(a.state().error_message.is_none());
    assert!(!a.state().exit);
}

#[test]
fn test_unbound_keys_change_nothing() {
    let mut a = app();
    let before = a.state().active_plot().line().ys().to_vec();
    press(&mut a, KeyCode::Char('z'));
    press(&mut a, KeyCode::F(5));

    assert!(!a.state().exit);
    assert_eq!(a.state().active_tab, DistributionKind::Normal);
    assert_eq!(a.state().active_plot().line().ys(), before.as_slice());
}

#[test]
fn test_custom_keybindings() {
    let mut keys = KeybindingsConfig::default();
    keys.global.quit = vec!["x".into()];
    keys.sliders.increase = vec!["+".into()];

    let plots = PlotConfig::default().build_plots().unwrap();
    let mut a = App::new(AppState::new(plots, DistributionKind::Normal, keys));

    press(&mut a, KeyCode::Char('q'));
    assert!(!a.state().exit);

    press(&mut a, KeyCode::Char('+'));
    assert_close(mean(&a), 1.1);

    press(&mut a, KeyCode::Char('x'));
    assert!(a.state().exit);
}
