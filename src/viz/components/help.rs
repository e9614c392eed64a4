use ratatui::{prelude::*, widgets::*};

use crate::viz::Tab;

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::from(key).light_cyan().bold(),
        Span::raw(" : "),
        Span::raw(action),
    ])
}

/// Key bindings shown for `tab`
pub fn help_lines(tab: Tab) -> Vec<Line<'static>> {
    let mut lines = vec![
        key_line("  q  ", "Close the plot"),
        key_line("  h  ", "Toggle help popup"),
        key_line(" Tab ", "Switch between plot and logs"),
    ];

    if tab == Tab::Logs {
        lines.extend([
            key_line("  s  ", "Toggle the target selector"),
            key_line("  f  ", "Focus on the selected target only"),
            key_line("⬆ / ⬇", "Switch log target"),
            key_line("⬅ / ➡", "Show fewer/more log levels"),
            key_line("- / +", "Capture fewer/more log levels"),
            key_line("PgUp ", "Page mode, scroll up"),
            key_line("PgDn ", "Page mode, scroll down"),
            key_line(" Esc ", "Leave page mode"),
        ]);
    }

    lines
}

/// Render the help popup centered in `area`
pub fn render_help(area: Rect, buf: &mut Buffer, tab: Tab) {
    let lines = help_lines(tab);

    let [_, center_vert, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length((lines.len() + 4) as u16),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(60),
        Constraint::Fill(1),
    ])
    .areas(center_vert);

    Clear.render(center, buf);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::proportional(1))
                .title("Help"),
        )
        .wrap(Wrap { trim: false })
        .render(center, buf);
}
