use distplot_core::{ConfigError, DistributionKind, DistributionPlot};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::LoadResult;

/// Everything the UI reads and mutates between frames.
#[derive(Debug)]
pub struct AppState {
    /// One plot per distribution, in [`DistributionKind::ALL`] order
    pub plots: Vec<DistributionPlot>,
    pub active_tab: DistributionKind,
    /// Selected slider row, per plot
    pub selected_control: Vec<usize>,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(
        plots: Vec<DistributionPlot>,
        active_tab: DistributionKind,
        keybindings: KeybindingsConfig,
    ) -> Self {
        let selected_control = vec![0; plots.len()];
        Self {
            plots,
            active_tab,
            selected_control,
            keybindings,
            error_message: None,
            exit: false,
        }
    }

    /// Build the startup state from what was read off disk.
    ///
    /// `start` overrides the configured first tab. An ignored keybindings
    /// file is shown in the status bar.
    pub fn from_loaded(
        loaded: LoadResult,
        start: Option<DistributionKind>,
    ) -> Result<Self, ConfigError> {
        let plots = loaded.config.build_plots()?;
        let active_tab = start.unwrap_or(loaded.config.start_distribution);
        let mut state = Self::new(plots, active_tab, loaded.keybindings);
        if let Some(warning) = loaded.keybindings_warning {
            state.set_error(warning);
        }
        Ok(state)
    }

    pub fn active_plot(&self) -> &DistributionPlot {
        &self.plots[self.active_tab.index()]
    }

    pub fn active_plot_mut(&mut self) -> &mut DistributionPlot {
        &mut self.plots[self.active_tab.index()]
    }

    /// Selected slider row of the active plot
    pub fn selected(&self) -> usize {
        self.selected_control[self.active_tab.index()]
    }

    pub fn switch_tab(&mut self, tab: DistributionKind) {
        if tab != self.active_tab {
            tracing::debug!(from = %self.active_tab, to = %tab, "switch tab");
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        let next = (self.active_tab.index() + 1) % DistributionKind::ALL.len();
        self.switch_tab(DistributionKind::ALL[next]);
    }

    pub fn prev_tab(&mut self) {
        let len = DistributionKind::ALL.len();
        let prev = (self.active_tab.index() + len - 1) % len;
        self.switch_tab(DistributionKind::ALL[prev]);
    }

    pub fn select_next_control(&mut self) {
        let count = self.active_plot().controls().len();
        let slot = &mut self.selected_control[self.active_tab.index()];
        *slot = (*slot + 1) % count;
    }

    pub fn select_prev_control(&mut self) {
        let count = self.active_plot().controls().len();
        let slot = &mut self.selected_control[self.active_tab.index()];
        *slot = (*slot + count - 1) % count;
    }

    /// Move the selected slider by `steps` ticks. Returns whether the curve changed.
    pub fn adjust_selected(&mut self, steps: i32) -> bool {
        let index = self.selected();
        let changed = self.active_plot_mut().nudge_control(index, steps);
        if changed {
            let plot = self.active_plot();
            let control = &plot.controls()[index];
            tracing::debug!(
                plot = plot.title(),
                parameter = control.name(),
                value = control.value(),
                "slider moved"
            );
        }
        changed
    }

    /// Return every slider of the active plot to its initial value.
    pub fn reset_active(&mut self) -> bool {
        let changed = self.active_plot_mut().reset_controls();
        if changed {
            tracing::debug!(plot = self.active_plot().title(), "sliders reset");
        }
        changed
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(%message, "error shown in status bar");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distplot_core::PlotConfig;

    fn state() -> AppState {
        let plots = PlotConfig::default().build_plots().unwrap();
        AppState::new(plots, DistributionKind::Normal, KeybindingsConfig::default())
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut s = state();
        s.prev_tab();
        assert_eq!(s.active_tab, DistributionKind::Pareto);
        s.next_tab();
        assert_eq!(s.active_tab, DistributionKind::Normal);
        s.next_tab();
        assert_eq!(s.active_plot().title(), "Exponential Distribution");
    }

    #[test]
    fn test_selection_is_per_plot_and_wraps() {
        let mut s = state();
        s.select_prev_control();
        assert_eq!(s.selected(), 1);

        s.switch_tab(DistributionKind::Pareto);
        assert_eq!(s.selected(), 0);
        s.select_next_control();
        s.select_next_control();
        s.select_next_control();
        assert_eq!(s.selected(), 0);

        s.switch_tab(DistributionKind::Normal);
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn test_adjust_and_reset() {
        let mut s = state();
        // mean: range 10 over 100 ticks
        assert!(s.adjust_selected(10));
        assert_eq!(s.active_plot().controls()[0].value(), 2.0);
        assert!(s.reset_active());
        assert_eq!(s.active_plot().controls()[0].value(), 1.0);
        assert!(!s.reset_active());
    }

    #[test]
    fn test_error_message_lifecycle() {
        let mut s = state();
        s.set_error("boom".into());
        assert_eq!(s.error_message.as_deref(), Some("boom"));
        s.clear_error();
        assert!(s.error_message.is_none());
    }
}
