use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::view::View;

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    /// Enter raw mode on the alternate screen with mouse reporting.
    ///
    /// Raw mode is switched back off if the screen setup fails.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        );
        if let Err(e) = entered {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, or forever if None, then take every
    /// event already queued behind it.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            return Ok(Vec::new());
        }

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    pub fn draw(&mut self, view: &View) -> io::Result<()> {
        for (y, line) in view.lines.iter().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            let (r, g, b) = line.fg;
            queue!(
                self.stdout,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine),
                SetForegroundColor(CtColor::Rgb { r, g, b }),
            )?;
            if line.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
