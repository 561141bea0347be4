use std::path::Path;

use clap::Parser;

use mfa::cli::{Cli, Commands};
use mfa::config::Settings;
use mfa::errors::Result;
use mfa::store::SqliteStore;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        mfa::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data_dir = Path::new(&cli.data_dir);

    // Settings fall back to defaults when no config file exists; the
    // store creates its schema on open, so startup is always safe.
    let settings = Settings::load(data_dir)?;
    let mut store = SqliteStore::open(&settings.db_path(data_dir))?;

    match cli.command {
        Commands::Add {
            ref name,
            ref secret,
            force,
        } => mfa::cli::commands::add::execute(&settings, &mut store, name, secret.as_deref(), force),
        Commands::Get { ref name } => {
            mfa::cli::commands::get::execute(&settings, &mut store, name)
        }
        Commands::Verify { ref name, ref code } => {
            mfa::cli::commands::verify::execute(&settings, &store, name, code)
        }
        Commands::List => mfa::cli::commands::list::execute(&store),
    }
}
