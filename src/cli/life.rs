//! Life command implementation - interactive TUI for Conway's Game of Life.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::stdout;
use std::time::{Duration, Instant};
use weasel::life::Grid;

/// Execute the life command.
///
/// # Errors
///
/// Returns an error if the grid dimensions are zero or the TUI fails.
pub(crate) fn execute(
    width: usize,
    height: usize,
    seed: Option<u64>,
    speed: u64,
) -> Result<(), CliError> {
    if width == 0 || height == 0 {
        return Err(CliError::new("grid dimensions must be positive"));
    }

    let seed = seed.unwrap_or_else(super::time_seed);
    let grid = Grid::random(&mut SmallRng::seed_from_u64(seed), width, height);

    run_tui(App::new(grid, seed, speed))
}

/// App state for the TUI.
struct App {
    grid: Grid,
    seed: u64,
    paused: bool,
    speed_ms: u64,
    last_step: Instant,
}

impl App {
    fn new(grid: Grid, seed: u64, speed_ms: u64) -> Self {
        Self {
            grid,
            seed,
            paused: false,
            speed_ms,
            last_step: Instant::now(),
        }
    }

    fn step_forward(&mut self) {
        self.grid.step();
        self.last_step = Instant::now();
    }

    fn reseed(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.grid = Grid::random(
            &mut SmallRng::seed_from_u64(self.seed),
            self.grid.width(),
            self.grid.height(),
        );
        self.last_step = Instant::now();
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(50).max(25);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 50).min(2000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if app.should_auto_step() {
            app.step_forward();
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(20)).map_err(|e| CliError::new(e.to_string()))? {
            if let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char(' ') => app.toggle_pause(),
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.paused = true;
                            app.step_forward();
                        }
                        KeyCode::Char('+' | '=') => app.increase_speed(),
                        KeyCode::Char('-') => app.decrease_speed(),
                        KeyCode::Char('r') => app.reseed(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Grid
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_grid(f, chunks[1], app);
    render_footer(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.paused { "PAUSED" } else { "RUNNING" };
    let title = format!(
        " Life | Generation {} | Alive: {} | {} | Speed: {}ms ",
        app.grid.generation(),
        app.grid.live_count(),
        status,
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    // Show the portion of the grid that fits the viewport.
    let visible_width = (area.width as usize).saturating_sub(2).min(app.grid.width());
    let visible_height = (area.height as usize).saturating_sub(2).min(app.grid.height());

    let lines: Vec<Line> = app
        .grid
        .rows()
        .take(visible_height)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .take(visible_width)
                .map(|&alive| {
                    if alive {
                        Span::styled("█", Style::default().fg(Color::Green))
                    } else {
                        Span::raw(" ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let controls = " [q] Quit  [Space] Pause  [→] Step  [+/-] Speed  [r] Reseed ";

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
