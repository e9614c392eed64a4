use std::{
    io::{self, stdout, Stdout},
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

use crossterm as ct;
use ct::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};

/// The terminal the plot is drawn on
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Set while the terminal is in the alternate screen
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Switch to the alternate screen in raw mode
///
/// A panic while the terminal is switched restores it before the panic message is printed.
pub fn init() -> io::Result<Tui> {
    install_panic_hook();

    ct::execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    ACTIVE.store(true, Ordering::SeqCst);
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Leave the alternate screen and raw mode
pub fn restore() -> io::Result<()> {
    ACTIVE.store(false, Ordering::SeqCst);
    leave()
}

fn leave() -> io::Result<()> {
    ct::execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Chain the terminal restore in front of the current panic hook, at most once per process
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if ACTIVE.swap(false, Ordering::SeqCst) {
                let _ = leave();
            }
            original_hook(panic_info);
        }));
    });
}
