use super::Frame;
use crate::bmi::{Category, UnitSystem};
use crate::state::{BmiField, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Render the calculator: inputs and result on the left, the reference
/// table on the right.
///
pub fn calculator(frame: &mut Frame, size: Rect, state: &State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(size);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(5)])
        .split(columns[0]);

    inputs(frame, left[0], state);
    result(frame, left[1], state);
    reference_table(frame, columns[1], state);
}

fn inputs(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title("Your measurements")
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let mut lines = vec![units_line(state), Line::from("")];
    // Only the selected unit system's input group is shown.
    for group in [UnitSystem::Metric, UnitSystem::Imperial] {
        if !state.units().is_visible(group) {
            continue;
        }
        for field in BmiField::for_units(group).iter().filter(|f| **f != BmiField::Units) {
            lines.push(field_line(theme, *field, state.bmi_form().value(*field), state.bmi_field() == *field));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), size);
}

fn units_line(state: &State) -> Line<'static> {
    let theme = state.theme();
    let focused = state.bmi_field() == BmiField::Units;
    let mut spans = vec![label_span(theme, BmiField::Units.label(), focused)];
    for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
        let selected = state.units().selected() == unit;
        let radio = if selected { "(•)" } else { "( )" };
        let style = if selected {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(format!("{} {}  ", radio, capitalize(unit.as_str())), style));
    }
    Line::from(spans)
}

fn field_line(theme: &Theme, field: BmiField, value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "▏" } else { "" };
    let value_style = if focused {
        styling::current_list_item_style(theme).add_modifier(Modifier::UNDERLINED)
    } else {
        styling::normal_text_style(theme)
    };
    Line::from(vec![
        label_span(theme, field.label(), focused),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn label_span(theme: &Theme, label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        styling::active_list_item_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    let marker = if focused { ">" } else { " " };
    Span::styled(format!("{} {:<13}", marker, label), style)
}

fn result(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let view = state.result();
    let block = Block::default()
        .title("Result")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let label_style = match view.highlighted() {
        Some(_) => styling::active_list_item_style(theme),
        None => styling::muted_text_style(theme),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("BMI  ", styling::muted_text_style(theme)),
            Span::styled(view.value_text.clone(), styling::banner_style(theme)),
        ]),
        Line::from(Span::styled(view.label_text.clone(), label_style)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), size);
}

fn reference_table(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let rows: Vec<Row> = state
        .result()
        .rows()
        .map(|(category, highlighted)| {
            let style = if highlighted {
                styling::highlighted_row_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            Row::new(vec![
                Cell::from(category.range_caption()),
                Cell::from(category.label()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(
            Row::new(vec!["BMI", "Category"]).style(styling::active_block_title_style()),
        )
        .block(
            Block::default()
                .title(format!("Reference ({} bands)", Category::ALL.len()))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(table, size);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
