use crate::contact::{StatusKind, SubmissionState};
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the border style for a block that may hold focus.
///
pub fn block_border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        active_block_border_style(theme)
    } else {
        normal_block_border_style(theme)
    }
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    current_list_item_style(theme).fg(theme.primary.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for hints and placeholders.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style of the highlighted reference table row.
///
pub fn highlighted_row_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style of the submit control for its current state.
///
pub fn button_style(theme: &Theme, state: SubmissionState, focused: bool) -> Style {
    let style = match state {
        SubmissionState::Idle => Style::default().fg(theme.primary.to_color()),
        SubmissionState::Loading => Style::default()
            .fg(theme.warning.to_color())
            .add_modifier(Modifier::DIM),
        SubmissionState::Success => Style::default().fg(theme.success.to_color()),
        SubmissionState::Error => Style::default().fg(theme.error.to_color()),
    };
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Return the style of the status message region.
///
pub fn status_style(theme: &Theme, kind: StatusKind) -> Style {
    match kind {
        StatusKind::Neutral => normal_text_style(theme),
        StatusKind::Success => Style::default().fg(theme.success.to_color()),
        StatusKind::Error => Style::default()
            .fg(theme.error.to_color())
            .add_modifier(Modifier::BOLD),
    }
}
