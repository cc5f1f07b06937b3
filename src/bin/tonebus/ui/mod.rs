//! TUI for the tone router demo.
//!
//! Runs in the display-refresh domain: once per frame it drains the meter
//! rings, recomputes RMS readings, redraws, and forwards key presses as
//! routing selections. The loop re-arms itself every frame and stops cleanly
//! when `should_quit` is set; it never touches the audio thread directly.

pub mod state;

mod meters;
mod routing;

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};

use tonebus::meter::{MeterSample, MeterView};
use tonebus::routing::{Selection, StereoSlot};

use meters::render_meters;
use routing::render_routing;
use state::RouteState;

/// UI application state.
pub struct UiApp {
    /// Display-side half of the audio meter tap.
    meter_view: MeterView,
    /// Routing selections toward the audio thread.
    selection_tx: Producer<Selection>,
    /// Applied-routing reports from the audio thread.
    state_rx: Consumer<RouteState>,
    /// Latest applied routing.
    route: RouteState,
    /// Slot the number keys select for.
    focused: StereoSlot,
    sample_rate: f64,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        meter_view: MeterView,
        selection_tx: Producer<Selection>,
        state_rx: Consumer<RouteState>,
        sample_rate: f64,
    ) -> Self {
        Self {
            meter_view,
            selection_tx,
            state_rx,
            route: RouteState::default(),
            focused: StereoSlot::Left,
            sample_rate,
            should_quit: false,
        }
    }

    /// Run the UI event loop.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Pull the freshest audio snapshot and routing report.
            self.meter_view.poll();
            while let Ok(route) = self.state_rx.pop() {
                self.route = route;
            }

            let readings: Vec<MeterSample> = (0..self.meter_view.channel_count())
                .map(|c| self.meter_view.sample(c))
                .collect();

            terminal.draw(|frame| self.render(frame, &readings))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused = match self.focused {
                    StereoSlot::Left => StereoSlot::Right,
                    StereoSlot::Right => StereoSlot::Left,
                };
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Out-of-range digits still travel as selections; the matrix
                // discards them without changing state.
                let channel = c as i64 - '1' as i64;
                let _ = self.selection_tx.push(Selection {
                    slot: self.focused,
                    channel,
                });
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, readings: &[MeterSample]) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Channel meters
                Constraint::Length(6), // Routing pane
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let header = Paragraph::new(format!(
            " multi-sine \u{2192} passthrough \u{2192} stereo   {} channels @ {} Hz",
            readings.len(),
            self.sample_rate,
        ))
        .block(Block::default().title(" tonebus ").borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let meters_block = Block::default().title(" Levels ").borders(Borders::ALL);
        let meters_inner = meters_block.inner(chunks[1]);
        frame.render_widget(meters_block, chunks[1]);
        render_meters(frame, meters_inner, readings);

        render_routing(frame, chunks[2], &self.route, self.focused);

        let help = Paragraph::new(" [Tab] Focus slot  [1-4] Route channel  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
