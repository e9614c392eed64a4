pub mod help;
pub mod log;
pub mod plot;

use crossterm::event::{Event, KeyCode, KeyEventKind};
pub use log::Logs;
pub use plot::Plot;
use ratatui::widgets::WidgetRef;

/// A widget that reacts to terminal events
pub trait Component: WidgetRef {
    /// **Returns** `true` if the event was consumed
    fn handle_ui_event(&mut self, event: &Event) -> bool;
}

/// The [`KeyCode`] of a key press, `None` for any other event
pub(crate) fn event_keycode(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    }
}
