use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lectern_config::Config;
use lectern_engine::io;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env, fs,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::Instant,
};

mod app;
mod document;
mod ui;

use app::App;

/// Logs go to a file; stderr belongs to the terminal UI.
fn init_logging() {
    let log_path = env::temp_dir().join("lectern-cli.log");
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Info);

    match fs::File::create(&log_path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    init_logging();

    // Determine articles path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let (config, from_config) = match (args.len(), Config::load()) {
        (_, Err(e)) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <articles-folder-path>", args[0]);
            process::exit(1);
        }
        (2, Ok(Some(mut config))) => {
            config.articles_path = PathBuf::from(&args[1]);
            (config, false)
        }
        (2, Ok(None)) => {
            let articles_path = PathBuf::from(&args[1]);
            match Config::create_default(articles_path.clone()) {
                Ok(config) => {
                    log::info!("Created default config file at {}", config_path.display());
                    (config, false)
                }
                Err(e) => {
                    log::warn!("Failed to create default config file: {e}");
                    (Config::new(articles_path), false)
                }
            }
        }
        (1, Ok(Some(config))) => (config, true),
        (1, Ok(None)) => {
            eprintln!("Error: No articles path provided and no config file found");
            eprintln!("Usage: {} <articles-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [articles-folder-path]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_articles_dir(&config.articles_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Articles path '{}'{source} is invalid: {e}",
            config.articles_path.display(),
        );
        process::exit(1);
    }
    log::info!("Reading articles from {}", config.articles_path.display());

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let now = Instant::now();
        if app.tick(now).is_some() {
            continue;
        }

        // wake for the tracker's next timer even when no key arrives
        if event::poll(app.next_wakeup(now))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code, Instant::now())
        {
            return Ok(());
        }
    }
}
