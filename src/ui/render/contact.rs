use super::Frame;
use crate::state::{ContactField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the contact form, its submit control and the status region.
///
pub fn contact(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let name = state.contact().form().name.clone();
    let email = state.contact().form().email.clone();
    text_input(frame, rows[0], state, ContactField::Name, &name);
    text_input(frame, rows[1], state, ContactField::Email, &email);
    message(frame, rows[2], state);
    submit_button(frame, rows[3], state);
    status(frame, rows[4], state);
}

fn text_input(frame: &mut Frame, size: Rect, state: &State, field: ContactField, value: &str) {
    let theme = state.theme();
    let focused = state.contact_field() == field;
    let block = Block::default()
        .title(field.label())
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, focused));
    let cursor = if focused { "▏" } else { "" };
    let text = Paragraph::new(Line::from(Span::styled(
        format!("{}{}", value, cursor),
        styling::normal_text_style(theme),
    )))
    .block(block);
    frame.render_widget(text, size);
}

fn message(frame: &mut Frame, size: Rect, state: &mut State) {
    let focused = state.contact_field() == ContactField::Message;
    let block = Block::default()
        .title(ContactField::Message.label())
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(state.theme(), focused));

    let textarea = state.message_editor_mut();
    textarea.set_block(block);
    frame.render_widget(textarea.widget(), size);
}

fn submit_button(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let button = state.contact().button();
    let focused = state.contact_field() == ContactField::Submit;
    let mut label = format!("[ {} ]", button.label());
    if button.is_disabled() {
        label.push_str("  (please wait)");
    }
    let paragraph = Paragraph::new(Line::from(Span::styled(
        label,
        styling::button_style(theme, button.state(), focused),
    )));
    frame.render_widget(paragraph, size);
}

fn status(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let status = state.contact().status();
    let paragraph = Paragraph::new(Line::from(Span::styled(
        status.text.clone(),
        styling::status_style(theme, status.kind),
    )));
    frame.render_widget(paragraph, size);
}
