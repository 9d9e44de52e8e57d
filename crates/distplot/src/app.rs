use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, chart::DensityChart, sliders::SliderPanel, status_bar::StatusBar,
    tab_bar::TabBar,
};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    chart: DensityChart,
    sliders: SliderPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            chart: DensityChart::new(),
            sliders: SliderPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let slider_rows = SliderPanel::height(self.state.active_plot().controls().len());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Tab bar
                Constraint::Min(0),              // Chart
                Constraint::Length(slider_rows), // Sliders
                Constraint::Length(2),           // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.chart.render(frame, chunks[1], &self.state);
        self.sliders.render(frame, chunks[2], &self.state);
        self.status_bar.render(frame, chunks[3], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key: &AppKeyEvent) {
        let global = &self.state.keybindings.global;
        if KeybindingsConfig::matches(key, &global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(key, &global.cancel) {
            self.state.clear_error();
            return;
        }

        let components: [&mut dyn Component; 3] =
            [&mut self.tab_bar, &mut self.sliders, &mut self.chart];
        for component in components {
            match component.handle_key(key, &mut self.state) {
                EventResult::NotHandled => continue,
                EventResult::Handled => return,
                EventResult::Exit => {
                    self.state.exit = true;
                    return;
                }
            }
        }
    }
}
