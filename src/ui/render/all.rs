use super::*;
use crate::state::{Section, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(frame.size());

    header(frame, rows[0], state);
    match state.current_section() {
        Section::Calculator => calculator(frame, rows[1], state),
        Section::Contact => contact(frame, rows[1], state),
    }
    log(frame, rows[2], state);
    footer(frame, rows[3], state);

    // The panel overlays the page while open.
    if state.nav().is_open() {
        nav(frame, rows[1], state);
    }
}
