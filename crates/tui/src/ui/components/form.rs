use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{AppState, Focus, FormField},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = matches!(state.focus, Focus::Form(_));
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .title("New Expense")
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_field(
        frame,
        rows[0],
        FormField::Amount,
        &state.form.amount,
        state.focus == Focus::Form(FormField::Amount),
        theme,
    );
    render_field(
        frame,
        rows[1],
        FormField::Category,
        &state.form.category,
        state.focus == Focus::Form(FormField::Category),
        theme,
    );
    render_field(
        frame,
        rows[2],
        FormField::Note,
        &state.form.note,
        state.focus == Focus::Form(FormField::Note),
        theme,
    );
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: FormField,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![
        Span::styled(format!("{:<9}", field.label()), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ];

    if field == FormField::Category && focused {
        spans.push(Span::styled(
            "  (↑/↓ suggestions)",
            Style::default().fg(theme.dim),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
