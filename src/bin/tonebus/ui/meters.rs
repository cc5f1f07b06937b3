//! Per-channel RMS level meters.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

use tonebus::meter::MeterSample;

/// Render one gauge row per metered channel.
///
/// `visual_percent` is 0 at full scale and grows toward (and past) 100 as
/// the level falls, so the filled portion of the bar is its complement,
/// clamped to the displayable range.
pub fn render_meters(frame: &mut Frame, area: Rect, readings: &[MeterSample]) {
    if readings.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); readings.len()])
        .split(area);

    for (i, (reading, row)) in readings.iter().zip(rows.iter()).enumerate() {
        let ratio = ((100.0 - reading.visual_percent) / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(meter_color(ratio)))
            .ratio(ratio)
            .label(format!("ch {}  {:>6.1} dB", i + 1, reading.level_db));
        frame.render_widget(gauge, *row);
    }
}

fn meter_color(ratio: f64) -> Color {
    if ratio > 0.9 {
        Color::LightRed
    } else if ratio > 0.7 {
        Color::LightYellow
    } else {
        Color::LightGreen
    }
}
