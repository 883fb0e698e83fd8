pub mod components;
pub mod keymap;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, entry form, search, table, totals bar, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(5), // Entry form
            Constraint::Length(3), // Search
            Constraint::Min(5),    // Records table
            Constraint::Length(1), // Totals bar
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::form::render(frame, layout[1], state, &theme);
    components::search::render(frame, layout[2], state, &theme);
    components::table::render(frame, layout[3], state, &theme);
    render_totals_bar(frame, layout[4], state, &theme);
    render_bottom_bar(frame, layout[5], state, &theme);

    components::quick_add::render(frame, area, state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let filter = state.filter.as_deref().unwrap_or("-");
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("File", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.file)),
        Span::styled("Records", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.count)),
        Span::styled("Filter", Style::default().fg(theme.dim)),
        Span::raw(format!(": {filter}  ")),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_totals_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Total", Style::default().fg(theme.dim)),
        Span::styled(
            format!(": {} {}   ", state.total, state.currency),
            Style::default().fg(theme.positive),
        ),
        Span::styled("This month", Style::default().fg(theme.dim)),
        Span::styled(
            format!(": {} {}", state.month_total, state.currency),
            Style::default().fg(theme.positive),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next field"),
    ];

    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("Ctrl+C", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Context-specific keyboard hints for the focused surface.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.focus {
        Focus::Form(_) => vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("↑/↓", Style::default().fg(theme.accent)),
            Span::raw(" suggestions  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" table"),
        ],
        Focus::Search => vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" filter  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" clear"),
        ],
        Focus::Table => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" move  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" quick add  "),
            Span::styled("/", Style::default().fg(theme.accent)),
            Span::raw(" search  "),
            Span::styled("t", Style::default().fg(theme.accent)),
            Span::raw(" total  "),
            Span::styled("m", Style::default().fg(theme.accent)),
            Span::raw(" monthly  "),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::raw(" reload  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ],
        Focus::QuickAdd => vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ],
    }
}
