use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::config::Settings;
use crate::game::Game;
use crate::sim::{SimHandle, spawn_simulation};
use crate::ui::draw_game;

mod input;

use input::{Action, Cursor, action_for_key, command_for_mouse};

type Term = Terminal<CrosstermBackend<Stdout>>;

const FRAME_POLL: Duration = Duration::from_millis(30);

pub fn run(settings: &Settings) -> Result<()> {
    let mut tui = TuiGuard::new().context("failed to set up the terminal")?;
    run_loop(tui.terminal_mut(), settings)
}

fn run_loop(terminal: &mut Term, settings: &Settings) -> Result<()> {
    let game = Game::new(settings);
    let mut snapshot = game.snapshot();
    let sim = spawn_simulation(game, settings.tick_interval());
    let mut cursor = Cursor::default();
    info!(tick_ms = settings.tick_ms, density = settings.density, "life board ready");

    loop {
        if let Some(latest) = sim.latest() {
            snapshot = latest;
        }

        terminal.draw(|frame| draw_game(frame, &snapshot, (cursor.row, cursor.col)))?;

        if !event::poll(FRAME_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = action_for_key(key.code) else {
                    continue;
                };
                if action == Action::Quit {
                    break;
                }
                handle_action(action, &mut cursor, &sim)?;
            }
            Event::Mouse(mouse) => {
                if let Some(cmd) = command_for_mouse(mouse, terminal.size()?) {
                    debug!(?cmd, "mouse command");
                    sim.send(cmd)?;
                }
            }
            _ => {}
        }
    }

    info!(generation = snapshot.generation, "quitting");
    sim.shutdown();
    Ok(())
}

fn handle_action(action: Action, cursor: &mut Cursor, sim: &SimHandle) -> Result<()> {
    match action {
        Action::Sim(cmd) => {
            debug!(?cmd, "key command");
            sim.send(cmd)?;
        }
        Action::MoveCursor { d_row, d_col } => *cursor = cursor.moved(d_row, d_col),
        Action::ToggleAtCursor => sim.send(cursor.toggle_command())?,
        Action::Quit => {}
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
