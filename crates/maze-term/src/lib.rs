//! Crossterm terminal renderer for maze walks.
//!
//! [`TermRenderer`] is the rendering collaborator of the analysis core: it
//! draws the maze, then plays a [`RevealEvent`] sequence with
//! [`play`](TermRenderer::play) — a strictly sequential scheduler loop that
//! owns the timing. One maze cell spans two terminal columns so cells come
//! out roughly square.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color as CtColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use maze_core::{Color, Maze, Point, progress_color};
use maze_paths::RevealEvent;

/// Terminal columns per maze cell.
const CELL_W: u16 = 2;

const WALL: Color = Color::from_rgb(20, 20, 20);
const FLOOR: Color = Color::from_rgb(200, 200, 200);

fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Draws the maze into the terminal and plays back reveal events.
pub struct TermRenderer {
    out: io::Stdout,
    active: bool,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            active: false,
        }
    }

    /// Enter the alternate screen and hide the cursor.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Paint every cell of the maze: walls dark, floor light.
    pub fn draw_maze(&mut self, maze: &Maze) -> io::Result<()> {
        for p in maze.bounds() {
            let blocked = maze.is_blocked(p).unwrap_or(true);
            let color = if blocked { WALL } else { FLOOR };
            self.queue_cell(p, color)?;
        }
        self.out.flush()
    }

    /// Paint a single maze cell with the given color.
    pub fn draw_cell(&mut self, p: Point, color: Color) -> io::Result<()> {
        self.queue_cell(p, color)?;
        self.out.flush()
    }

    fn queue_cell(&mut self, p: Point, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(p.x as u16 * CELL_W, p.y as u16),
            SetBackgroundColor(to_ct_color(color))
        )?;
        write!(self.out, "{:1$}", "", CELL_W as usize)?;
        Ok(())
    }

    /// Play a reveal-event sequence: color each cell by its progress along
    /// the path, flush, then honor the event's delay. Strictly sequential;
    /// event N finishes (including its pause) before event N+1 starts.
    pub fn play(
        &mut self,
        events: impl Iterator<Item = RevealEvent>,
        path_len: u32,
    ) -> io::Result<()> {
        for ev in events {
            self.draw_cell(ev.pos, progress_color(ev.dist_to_end, path_len))?;
            if !ev.delay.is_zero() {
                thread::sleep(ev.delay);
            }
        }
        Ok(())
    }

    /// Block until any key is pressed, so the final frame stays visible.
    pub fn wait_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }

    /// Sleep while keeping the terminal as-is (used for the lead-in pause).
    pub fn pause(&mut self, d: Duration) {
        thread::sleep(d);
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        self.close();
    }
}
