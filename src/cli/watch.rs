//! Watch command implementation - interactive TUI for the evolution run.

#![allow(clippy::needless_pass_by_value)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
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
use weasel::evo::{Engine, EvolutionConfig, FitnessStats, Generation};

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the TUI fails.
pub(crate) fn execute(
    target: String,
    alphabet: String,
    population: usize,
    mutation_rate: f64,
    seed: Option<u64>,
    speed: u64,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(super::time_seed);

    let config = EvolutionConfig {
        target,
        alphabet,
        population_size: population,
        mutation_rate,
        seed,
        ..EvolutionConfig::default()
    };

    let engine = Engine::seeded(&config)?;
    run_tui(App::new(engine, config, speed))
}

/// App state for the TUI.
struct App {
    engine: Engine<SmallRng>,
    config: EvolutionConfig,
    last: Option<Generation>,
    paused: bool,
    speed_ms: u64,
    last_step: Instant,
}

impl App {
    fn new(engine: Engine<SmallRng>, config: EvolutionConfig, speed_ms: u64) -> Self {
        Self {
            engine,
            config,
            last: None,
            paused: false,
            speed_ms,
            last_step: Instant::now(),
        }
    }

    fn step_forward(&mut self) {
        if !self.engine.has_converged() {
            self.last = Some(self.engine.step());
            self.last_step = Instant::now();
        }
    }

    fn restart(&mut self) {
        self.engine = Engine::seeded(&self.config).expect("config validated at startup");
        self.last = None;
        self.paused = true;
        self.last_step = Instant::now();
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(25).max(10);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 25).min(2000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused
            && !self.engine.has_converged()
            && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
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
                        KeyCode::Char('r') => app.restart(),
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
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_phrases(f, main_chunks[0], app);
    render_stats(f, main_chunks[1], app);

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.engine.has_converged() {
        "CONVERGED"
    } else if app.paused {
        "PAUSED"
    } else {
        "RUNNING"
    };

    let title = format!(
        " Weasel | Generation {} | {} | Speed: {}ms ",
        app.engine.generation(),
        status,
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_phrases(f: &mut Frame, area: Rect, app: &App) {
    let target = app.engine.target();
    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  target:  "),
            Span::styled(target.to_string(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if let Some(generation) = &app.last {
        // Highlight matching positions of the fittest phrase.
        let mut spans = vec![Span::raw("  fittest: ")];
        for (c, t) in generation.fittest.chars().iter().zip(target.chars()) {
            let style = if c == t {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red)
            };
            spans.push(Span::styled(c.to_string(), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "  score: {} / {}",
            generation.score, generation.max_score
        )));
        if generation.converged {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  converged after {} generations", generation.generation),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
    } else {
        lines.push(Line::from("  evaluating first generation..."));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Phrase "));
    f.render_widget(widget, area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let stats = FitnessStats::from_pool(app.engine.fitness_pool());

    let lines = vec![
        Line::from(""),
        Line::from(format!("  population: {}", app.engine.population().len())),
        Line::from(format!("  mutation:   {}", app.config.mutation_rate)),
        Line::from(""),
        Line::from(format!("  best score: {}", stats.best)),
        Line::from(format!("  mean score: {:.1}", stats.mean)),
        Line::from(format!("  std dev:    {:.1}", stats.std_dev)),
    ];

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Population "));
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.engine.has_converged() {
        " [q] Quit  [r] Restart "
    } else {
        " [q] Quit  [Space] Pause  [→] Step  [+/-] Speed  [r] Restart "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
