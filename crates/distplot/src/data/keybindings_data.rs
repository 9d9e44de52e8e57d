//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.distplot/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Slider panel keybindings
    pub sliders: SliderBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
    pub tab_1: Vec<String>,
    pub tab_2: Vec<String>,
    pub tab_3: Vec<String>,
    pub tab_4: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
            tab_1: vec!["1".into()],
            tab_2: vec!["2".into()],
            tab_3: vec!["3".into()],
            tab_4: vec!["4".into()],
            next_tab: vec!["tab".into()],
            prev_tab: vec!["shift+tab".into()],
        }
    }
}

impl GlobalBindings {
    /// Bindings for the n-th tab (0-based), if there is one.
    pub fn tab(&self, index: usize) -> Option<&[String]> {
        match index {
            0 => Some(&self.tab_1),
            1 => Some(&self.tab_2),
            2 => Some(&self.tab_3),
            3 => Some(&self.tab_4),
            _ => None,
        }
    }
}

/// Keybindings for selecting and moving sliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub decrease: Vec<String>,
    pub increase: Vec<String>,
    pub decrease_coarse: Vec<String>,
    pub increase_coarse: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for SliderBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            decrease: vec!["h".into(), "left".into()],
            increase: vec!["l".into(), "right".into()],
            decrease_coarse: vec!["shift+h".into(), "shift+left".into()],
            increase_coarse: vec!["shift+l".into(), "shift+right".into()],
            reset: vec!["r".into()],
        }
    }
}
