use super::Frame;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

const BLOCK_TITLE: &str = "Navigation";
const PANEL_WIDTH: u16 = 28;

/// Render the navigation panel over the left edge of the page.
///
pub fn nav(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let area = Rect {
        width: size.width.min(PANEL_WIDTH),
        height: size.height.min(Section::ALL.len() as u16 + 2),
        ..size
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let marker = if *section == state.current_section() { "•" } else { " " };
            ListItem::new(format!("{} {}", marker, section.title()))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .highlight_symbol("> ")
        .block(block);

    let mut list_state = ListState::default();
    list_state.select(Some(state.nav_index()));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
