// sortty: step-through sorting algorithm visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::Cli;
use sortty::generator::ArrayGenerator;
use sortty::ui::{App, AppOptions};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => ArrayGenerator::seeded(seed),
        None => ArrayGenerator::new(),
    };

    if cli.trace {
        // Headless: logs go to stderr, the trace to stdout
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();

        let input = match &cli.values {
            Some(values) => values.clone(),
            None => generator.generate(cli.distribution, cli.clamped_size()),
        };
        let result = cli.algorithm.run(&input);
        info!(
            algorithm = cli.algorithm.key(),
            len = input.len(),
            steps = result.steps.len(),
            "traced"
        );
        serde_json::to_writer_pretty(io::stdout().lock(), &result)?;
        println!();
        return Ok(());
    }

    // The TUI owns the terminal, so only log when a file was given
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let options = AppOptions {
        algorithm: cli.algorithm,
        distribution: cli.distribution,
        size: cli.clamped_size(),
        speed: cli.clamped_speed(),
        mode: cli.mode(),
        values: cli.values.clone(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(options, generator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
