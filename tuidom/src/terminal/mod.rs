use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode alternate-screen terminal with a diffing double buffer.
///
/// The terminal is restored when this value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
    /// Set after a resize so the next frame repaints every cell.
    full_redraw: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
            full_redraw: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for terminal events. `None` blocks until at least one arrives;
    /// everything already pending is drained into the same batch.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let ready = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };
        if !ready {
            return Ok(events);
        }

        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            self.full_redraw = true;
        }

        self.current_buffer.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer);

        self.flush()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.full_redraw {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let changed: Vec<(u16, u16, Cell)> = if self.full_redraw {
            let buf = &self.current_buffer;
            (0..buf.height())
                .flat_map(|y| (0..buf.width()).map(move |x| (x, y)))
                .filter_map(|(x, y)| buf.get(x, y).map(|cell| (x, y, *cell)))
                .collect()
        } else {
            self.current_buffer
                .diff(&self.previous_buffer)
                .map(|(x, y, cell)| (x, y, *cell))
                .collect()
        };
        self.full_redraw = false;

        let mut pen = Pen::new();
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in changed {
            // The wide character to the left already covers this column
            if cell.wide_continuation {
                continue;
            }
            if !pen.follows(x, y) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            pen.apply(&mut self.stdout, &cell)?;
            write!(self.stdout, "{}", cell.char)?;
            pen.advance(x, y, cell.char);
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Last written position and attributes, to skip redundant escapes.
struct Pen {
    next: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn new() -> Self {
        Self {
            next: None,
            fg: None,
            bg: None,
            style: TextStyle::new(),
        }
    }

    fn follows(&self, x: u16, y: u16) -> bool {
        self.next == Some((x, y))
    }

    /// Record where the terminal cursor ends up after writing `ch` at (x, y).
    ///
    /// A zero-width character does not move the terminal cursor, but the
    /// buffer gave it a column of its own, so the next cell needs a `MoveTo`.
    fn advance(&mut self, x: u16, y: u16, ch: char) {
        self.next = match char_width(ch) {
            0 => None,
            width => Some((x.saturating_add(width as u16), y)),
        };
    }

    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.style != self.style {
            // Bold and dim share one reset, so restart from a clean slate
            queue!(out, SetAttribute(Attribute::Reset))?;
            if cell.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            if cell.style.italic {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            if cell.style.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            self.style = cell.style;
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_crossterm(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        Ok(())
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
