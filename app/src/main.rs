use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use business_manager::ui::render;
use business_manager::{AppConfig, BusinessManagerApp};
use shared::Language;

/// Small business manager for the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Language before onboarding: en or hi
    #[arg(long)]
    language: Option<Language>,
    /// Start with the offline banner shown
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(language) = args.language {
        config.default_language = language;
    }
    config.start_offline |= args.offline;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();
    info!("Starting Business Manager");

    let mut app = BusinessManagerApp::new(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_frame(&app, &mut stdout)?;
    for line in stdin.lock().lines() {
        app.handle_line(&line?);
        if !app.is_running() {
            break;
        }
        print_frame(&app, &mut stdout)?;
    }

    info!("Business Manager closed");
    Ok(())
}

fn print_frame(app: &BusinessManagerApp, out: &mut impl Write) -> Result<()> {
    for line in render(app)? {
        writeln!(out, "{}", line)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
