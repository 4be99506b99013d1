// Terminal surface: raw mode + alternate screen, owned by one picker run.
// ref: ratatui docs — https://ratatui.rs/concepts/backends/

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::debug;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A full-screen drawing surface that must be released before anything
/// else is written to stdout.
pub trait Surface {
    type Backend: Backend;

    fn terminal(&mut self) -> &mut Terminal<Self::Backend>;

    /// Restore the terminal. Calling it again is a no-op.
    fn release(&mut self) -> io::Result<()>;
}

// Set while raw mode / alternate screen are active. Whoever swaps it back to
// false (surface release or panic hook) does the restore; everyone else skips it.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

fn claim_restore() -> bool {
    TERMINAL_ACTIVE.swap(false, Ordering::SeqCst)
}

/// Every step has already run when this is called; report the first failure.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

pub struct CrosstermSurface {
    terminal: Tui,
}

impl CrosstermSurface {
    pub fn init() -> io::Result<Self> {
        enable_raw_mode()?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = restore_stdout();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = restore_stdout();
                return Err(e);
            }
        };
        debug!("terminal surface acquired");
        Ok(Self { terminal })
    }
}

impl Surface for CrosstermSurface {
    type Backend = CrosstermBackend<Stdout>;

    fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    fn release(&mut self) -> io::Result<()> {
        if !claim_restore() {
            return Ok(());
        }
        let result = first_error([
            disable_raw_mode(),
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen),
            self.terminal.show_cursor(),
        ]);
        debug!(ok = result.is_ok(), "terminal surface released");
        result
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

fn restore_stdout() -> io::Result<()> {
    if !claim_restore() {
        return Ok(());
    }
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen, Show),
    ])
}

/// Leave the alternate screen before the default hook prints, so a panic
/// message is not swallowed by the TUI.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_stdout();
        default_hook(info);
    }));
}

#[cfg(test)]
pub use testing::TestSurface;
