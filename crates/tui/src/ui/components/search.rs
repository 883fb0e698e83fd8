use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Search;
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![Span::styled(
        format!("{}{cursor}", state.search),
        value_style,
    )]);

    let block = Block::default()
        .title("Search Category")
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
