//! Routing pane: which source channel feeds each stereo slot.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tonebus::routing::StereoSlot;

use super::state::RouteState;

pub fn render_routing(frame: &mut Frame, area: Rect, route: &RouteState, focused: StereoSlot) {
    let lines: Vec<Line> = StereoSlot::ALL
        .into_iter()
        .map(|slot| {
            let connected = match slot {
                StereoSlot::Left => route.left,
                StereoSlot::Right => route.right,
            };
            let source = match connected {
                Some(channel) => format!("Channel {}", channel + 1),
                None => "unconnected".to_string(),
            };

            let style = if slot == focused {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if slot == focused { ">" } else { " " };

            Line::from(Span::styled(
                format!(" {marker} {:<5} \u{2190} {source}", slot.label()),
                style,
            ))
        })
        .collect();

    let pane = Paragraph::new(lines)
        .block(Block::default().title(" Output Routing ").borders(Borders::ALL));
    frame.render_widget(pane, area);
}
