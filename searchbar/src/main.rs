use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use searchbar::{Flow, Host, INPUT_ID, PreferencesStore, paths};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::{Terminal, translate};

#[derive(Parser)]
#[command(name = "searchbar")]
#[command(version)]
#[command(about = "Search input bound to a preferences file", long_about = None)]
struct Cli {
    /// Preferences file to read and write (defaults to the platform config dir)
    #[arg(long)]
    prefs: Option<PathBuf>,
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&path)?)?;
    Ok(())
}

fn run(mut host: Host) -> Result<(), Box<dyn Error>> {
    let mut term = Terminal::new()?;

    loop {
        term.render(&host.element())?;

        for raw in term.poll(None)? {
            let Some(event) = translate(&raw, Some(INPUT_ID)) else {
                continue;
            };
            if let Flow::Quit = host.handle(event)? {
                return Ok(());
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging()?;

    let store = match cli.prefs {
        Some(path) => PreferencesStore::new(path),
        None => PreferencesStore::default_location()?,
    };
    log::info!("using preferences at {}", store.path().display());

    let host = Host::new(store)?;
    if let Err(e) = run(host) {
        log::error!("{e}");
        return Err(e);
    }
    Ok(())
}
