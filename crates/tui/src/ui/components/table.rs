use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use ledger::TIMESTAMP_FORMAT;

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Table;
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .title("Expenses")
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.rows.is_empty() {
        let message = if state.filter.is_some() {
            "No expenses match the filter."
        } else {
            "No expenses yet."
        };
        frame.render_widget(
            Paragraph::new(Line::from(message))
                .style(Style::default().fg(theme.dim))
                .block(block),
            area,
        );
        return;
    }

    let items = state
        .rows
        .iter()
        .map(|record| {
            let date = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
            let amount = format!("{} {}", record.amount, state.currency);
            let text = format!(
                "{date}  {amount:>12}  {:<12} {}",
                record.category, record.note
            );
            ListItem::new(Line::from(text))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
