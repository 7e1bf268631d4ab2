use super::Frame;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for what currently receives input.
///
fn hints(state: &State) -> &'static str {
    if state.nav().is_open() {
        return " ↑/↓: choose  Enter: go  Esc: close";
    }
    match state.current_section() {
        Section::Calculator => {
            " Tab: next field  ←/→: units  Enter: calculate  Ctrl+R: reset  Ctrl+C: quit"
        }
        Section::Contact => " Tab: next field  Enter/Ctrl+S: send  Ctrl+C: quit",
    }
}

/// Render footer with key hints and the copyright line.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(size);

    let hint_line = Paragraph::new(Line::from(Span::styled(
        hints(state),
        styling::muted_text_style(theme),
    )));
    frame.render_widget(hint_line, columns[0]);

    let year = chrono::Local::now().year();
    let copyright = Paragraph::new(Line::from(Span::styled(
        format!("© {} ", year),
        styling::muted_text_style(theme),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(copyright, columns[1]);
}
