use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Log";

/// Render log widget according to state, newest entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.log_entries();
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                ratatui::style::Style::default().fg(theme.error.to_color())
            } else if entry.contains(" WARN ") {
                ratatui::style::Style::default().fg(theme.warning.to_color())
            } else {
                styling::muted_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(entry, style)]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, size);
}
