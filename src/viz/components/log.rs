use crossterm::event::{Event, KeyCode};
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use super::{event_keycode, Component};

/// Log view of the updates, fed by the `tui-logger` sink
pub struct Logs {
    state: TuiWidgetState,
}

impl Logs {
    pub fn new() -> Self {
        Self {
            state: TuiWidgetState::new().set_default_display_level(log::LevelFilter::Debug),
        }
    }
}

impl Default for Logs {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetRef for Logs {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        TuiLoggerSmartWidget::default()
            .style(Style::default().white())
            .style_error(Style::default().light_red())
            .style_warn(Style::default().light_yellow())
            .style_info(Style::default().cyan())
            .style_debug(Style::default().light_green())
            .output_separator(' ')
            .state(&self.state)
            .render(area, buf);
    }
}

/// Translate a key into the log widget's own navigation events
fn widget_event(key: KeyCode) -> Option<TuiWidgetEvent> {
    Some(match key {
        KeyCode::Char('s') => TuiWidgetEvent::HideKey,
        KeyCode::Char('f') => TuiWidgetEvent::FocusKey,
        KeyCode::Up => TuiWidgetEvent::UpKey,
        KeyCode::Down => TuiWidgetEvent::DownKey,
        KeyCode::Left => TuiWidgetEvent::LeftKey,
        KeyCode::Right => TuiWidgetEvent::RightKey,
        KeyCode::Char('+') | KeyCode::Char('=') => TuiWidgetEvent::PlusKey,
        KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
        KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
        KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
        KeyCode::Esc => TuiWidgetEvent::EscapeKey,
        _ => return None,
    })
}

impl Component for Logs {
    fn handle_ui_event(&mut self, event: &Event) -> bool {
        match event_keycode(event).and_then(widget_event) {
            Some(widget_event) => {
                self.state.transition(widget_event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn logs_handle_ui_event() {
        let mut logs = Logs::new();
        assert!(logs.handle_ui_event(&key(KeyCode::Char('s'), KeyEventKind::Press)));
        assert!(
            !logs.handle_ui_event(&key(KeyCode::Char('s'), KeyEventKind::Release)),
            "releases are ignored"
        );
        assert!(
            !logs.handle_ui_event(&key(KeyCode::Char('q'), KeyEventKind::Press)),
            "unmapped keys fall through"
        );
        assert!(!logs.handle_ui_event(&Event::FocusGained));
    }
}
