use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = " BMI Calculator ";

/// Render page header with the navigation toggle control.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(TITLE, styling::banner_style(theme)),
        Span::styled(
            format!("· {}", state.current_section().title()),
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);

    let (marker, style) = if state.nav().aria_expanded() {
        ("▾", styling::active_list_item_style(theme))
    } else {
        ("≡", styling::normal_text_style(theme))
    };
    let toggle = Line::from(Span::styled(format!("{} Menu (Ctrl+N)", marker), style));
    frame.render_widget(Paragraph::new(toggle).alignment(ratatui::layout::Alignment::Right), columns[1]);
}
