use dioxus::prelude::*;
use lectern_config::Config;
use lectern_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

fn usage_and_exit() -> ! {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "lectern-dioxus".to_string());
    eprintln!("Usage: {program_name} [articles-folder-path]");
    eprintln!(
        "Or create a config file at {}",
        Config::config_path().display()
    );
    process::exit(1);
}

/// Settings from the config file, with the articles path overridden by the
/// command line when one is given.
fn resolve_config() -> (Config, bool) {
    let args: Vec<String> = env::args().collect();
    let loaded = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            usage_and_exit();
        }
    };

    match (args.len(), loaded) {
        (2, Some(mut config)) => {
            config.articles_path = PathBuf::from(&args[1]);
            (config, false)
        }
        (2, None) => (starter_config(PathBuf::from(&args[1])), false),
        (1, Some(config)) => (config, true),
        (1, None) => {
            eprintln!("Error: No articles path provided and no config file found");
            usage_and_exit();
        }
        _ => usage_and_exit(),
    }
}

/// First run with a path argument: remember it in a new config file.
fn starter_config(articles_path: PathBuf) -> Config {
    match Config::create_default(articles_path.clone()) {
        Ok(config) => {
            log::info!(
                "Created default config file at {}",
                Config::config_path().display()
            );
            config
        }
        Err(e) => {
            log::warn!("Failed to create default config file: {e}");
            Config::new(articles_path)
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("lectern starting up");

    let (config, from_config) = resolve_config();
    log::info!(
        "Reading articles from {} ({:?} navigation)",
        config.articles_path.display(),
        config.reader.navigation
    );

    if let Err(e) = io::validate_articles_dir(&config.articles_path) {
        let source = if from_config {
            format!(" from config file '{}'", Config::config_path().display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Articles path '{}'{source} is invalid: {e}",
            config.articles_path.display(),
        );
        process::exit(1);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(config)
        .launch(app_root);
}

fn app_root() -> Element {
    let config = use_context::<Config>();

    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Lectern")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
