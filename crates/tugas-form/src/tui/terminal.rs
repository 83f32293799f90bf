/*
[INPUT]:  Crossterm stdout, terminal raw mode, ratatui backend
[OUTPUT]: TerminalGuard managing alternate screen lifecycle
[POS]:    TUI terminal lifecycle guard
[UPDATE]: When changing how the terminal is entered or restored
*/

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Owns the terminal for the lifetime of the form; restores it on drop or panic
pub(super) struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    pub(super) fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = enter_screen(&mut stdout) {
            restore();
            return Err(err).context("enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore();
                return Err(err).context("create terminal");
            }
        };
        install_panic_hook();
        Ok(Self { terminal })
    }

    pub(super) fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f).context("draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.execute(EnterAlternateScreen)?.execute(Hide)?;
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.execute(LeaveAlternateScreen)?.execute(Show)?;
    Ok(())
}

fn restore() {
    let _ = leave_screen(&mut io::stdout());
    let _ = terminal::disable_raw_mode();
}

/// Panic messages would be lost on the alternate screen
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_screen_switches_and_hides_cursor() {
        let mut out = Vec::new();
        enter_screen(&mut out).expect("write to buffer");
        let text = String::from_utf8(out).expect("ansi output");
        assert!(text.contains("\u{1b}[?1049h"), "output: {text:?}");
        assert!(text.contains("\u{1b}[?25l"), "output: {text:?}");
    }

    #[test]
    fn test_leave_screen_restores_main_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).expect("write to buffer");
        let text = String::from_utf8(out).expect("ansi output");
        assert!(text.contains("\u{1b}[?1049l"), "output: {text:?}");
        assert!(text.contains("\u{1b}[?25h"), "output: {text:?}");
    }
}
