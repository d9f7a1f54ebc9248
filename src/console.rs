use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use lifeframe::{PixelBuffer, Pos2};

use crate::{
    host::{Host, HostCommand},
    stats::Report,
};

/// Enables raw mode and then enters the screen, rolling raw mode back if
/// entering fails so the terminal is never left half set up
fn start_session(
    enable: impl FnOnce() -> io::Result<()>,
    enter: impl FnOnce() -> io::Result<()>,
    disable: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    enable().context("failed to enable raw mode")?;
    if let Err(err) = enter() {
        if let Err(restore) = disable() {
            tracing::error!(err = ?restore, "failed to disable raw mode");
        }
        return Err(err).context("failed to enter alternate screen");
    }
    Ok(())
}

/// The part of the terminal grid that is on screen, moved with the arrow keys
#[derive(Debug, Default)]
struct Viewport {
    tl: Pos2,
}
impl Viewport {
    fn handle(&mut self, event: Event) -> HostCommand {
        match event {
            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => {}
            // CTRL+C
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => return HostCommand::Exit,
            // arrows to move the viewport
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up => self.tl.y = (self.tl.y - 1).max(0),
                KeyCode::Down => self.tl.y += 1,
                KeyCode::Left => self.tl.x = (self.tl.x - 1).max(0),
                KeyCode::Right => self.tl.x += 1,
                _ => {}
            },
            _ => {}
        }
        HostCommand::Continue
    }

    /// Handles every event in `events`, stopping early on an exit request
    fn handle_all<I>(&mut self, events: I) -> io::Result<HostCommand>
    where
        I: IntoIterator<Item = io::Result<Event>>,
    {
        for event in events {
            if let HostCommand::Exit = self.handle(event?) {
                return Ok(HostCommand::Exit);
            }
        }
        Ok(HostCommand::Continue)
    }
}

/// Events that are already queued, read without blocking
fn pending_events() -> impl Iterator<Item = io::Result<Event>> {
    std::iter::from_fn(|| match event::poll(Duration::ZERO) {
        Ok(true) => Some(event::read()),
        Ok(false) => None,
        Err(err) => Some(Err(err)),
    })
}

/// Presents frames in the terminal, one character cell per pixel
///
/// A pixel is drawn when its alpha channel is non-zero. The terminal is put
/// in raw mode on an alternate screen for as long as this value lives.
pub struct ConsoleHost {
    viewport: Viewport,
    report: String,
}
impl ConsoleHost {
    pub fn new() -> Result<Self> {
        start_session(
            terminal::enable_raw_mode,
            || execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide),
            terminal::disable_raw_mode,
        )?;
        Ok(Self {
            viewport: Viewport::default(),
            report: String::new(),
        })
    }

    fn draw(&self, pixels: &PixelBuffer) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // keep the bottom row for the report footer
        let rows = rows.saturating_sub(1);
        let tl = self.viewport.tl;

        let mut stdout = io::stdout().lock();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for row in 0..rows {
            let y = tl.y as usize + row as usize;
            if y >= pixels.height() {
                break;
            }
            for col in 0..cols {
                let x = tl.x as usize + col as usize;
                match pixels.pixel(x, y) {
                    Some([.., alpha]) if alpha != 0 => {
                        queue!(stdout, cursor::MoveTo(col, row))?;
                        stdout.write_all("█".as_bytes())?;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }

        queue!(stdout, cursor::MoveTo(0, rows))?;
        stdout.write_all(self.report.as_bytes())?;
        stdout.flush()
    }
}

impl Host for ConsoleHost {
    fn present(&mut self, pixels: &PixelBuffer) -> Result<()> {
        self.draw(pixels).context("failed to draw frame to terminal")
    }

    fn poll_events(&mut self) -> Result<HostCommand> {
        self.viewport
            .handle_all(pending_events())
            .context("failed to read terminal events")
    }

    fn report(&mut self, report: Report) {
        tracing::debug!(%report, "progress");
        self.report = report.to_string();
    }
}

impl Drop for ConsoleHost {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}
