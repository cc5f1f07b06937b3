//! tonebus - multichannel tone router demo
//!
//! Four phase-continuous sine channels feed an index-preserving router; the
//! TUI meters every channel and routes two of them to the stereo output.
//!
//! Run with: cargo run

mod app;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();

    let res = app::run(terminal);

    ratatui::restore();
    res
}
