use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::grid::{Coord, Grid, GridFrame, TileFrame};

/// Terminal playback of a recorded frame list.
///
/// Strictly a consumer of the engine's output: every frame is a complete
/// snapshot, so playback needs no memory of earlier frames and cancelling
/// only discards frames that were already computed.
pub struct App {
    /// Delay between displayed frames
    frame_delay: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(40),
        }
    }
}

impl App {
    const MIN_FRAME_DELAY: Duration = Duration::from_millis(5);
    const MAX_FRAME_DELAY: Duration = Duration::from_millis(640);

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        crossterm::queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Steps through the frames, compositing walls, start and goal over each
    /// one.
    ///
    /// Esc cancels playback; ↑/↓ halve/double the frame delay. Returns
    /// `true` if the animation played to the end, `false` if it was
    /// cancelled.
    pub fn animate(
        &mut self,
        frames: &[GridFrame],
        walls: &Grid<bool>,
        start: Coord,
        goal: Coord,
    ) -> std::io::Result<bool> {
        let mut stdout = std::io::stdout();
        for frame in frames {
            while event::poll(Duration::ZERO)? {
                if let event::Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Esc => {
                            tracing::debug!("[app] playback cancelled by user");
                            return Ok(false);
                        }
                        KeyCode::Up => {
                            self.frame_delay = (self.frame_delay / 2).max(App::MIN_FRAME_DELAY);
                        }
                        KeyCode::Down => {
                            self.frame_delay = (self.frame_delay * 2).min(App::MAX_FRAME_DELAY);
                        }
                        _ => {}
                    }
                }
            }
            Self::draw_frame(&mut stdout, frame, walls, start, goal)?;
            std::thread::sleep(self.frame_delay);
        }
        Ok(true)
    }

    fn draw_frame(
        stdout: &mut Stdout,
        frame: &GridFrame,
        walls: &Grid<bool>,
        start: Coord,
        goal: Coord,
    ) -> std::io::Result<()> {
        queue!(stdout, cursor::MoveTo(0, 0))?;
        for row in 0..frame.height() {
            for col in 0..frame.width() {
                let coord = (row, col);
                let tile = if coord == start {
                    TileFrame::Start
                } else if coord == goal {
                    TileFrame::Goal
                } else if walls[coord] {
                    TileFrame::Wall
                } else {
                    frame[coord]
                };
                queue!(stdout, Print(tile))?;
            }
            queue!(stdout, Print("\r\n"))?;
        }
        stdout.flush()
    }

    /// Blocks until any key is pressed.
    pub fn wait_for_key() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}
