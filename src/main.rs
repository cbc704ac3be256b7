//! rcsect - Shell Configuration Section Manager

use anyhow::Result;
use clap::Parser;
use dialoguer::Confirm;

use rcsect::cli::args::Commands;
use rcsect::cli::{commands, Cli, Context};
use rcsect::storage::{DocumentStore, FileStore};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle init-config early (doesn't require a shell file)
    if matches!(cli.command, Commands::InitConfig) {
        let config = rcsect::config::load_or_create_config()?;
        rcsect::config::save_config(&config)?;
        println!("Wrote {}", rcsect::Config::config_path().display());
        return Ok(());
    }

    let ctx = Context::from_cli(&cli)?;
    log::debug!(
        "operating on {} ({})",
        ctx.config_file.display(),
        ctx.shell_type
    );

    // History listing and clearing work without the shell file
    let needs_file = !matches!(cli.command, Commands::History | Commands::ClearHistory);
    let mut store = FileStore::new(&ctx.config_file, &ctx.config.storage);
    if needs_file && !store.exists() {
        let create = ctx.yes
            || Confirm::new()
                .with_prompt(format!(
                    "Config file '{}' not found. Create it?",
                    ctx.config_file.display()
                ))
                .default(true)
                .interact()?;
        if !create {
            anyhow::bail!("Config file not found. Use --file to specify a different path.");
        }
        store.write("")?;
        ctx.print_success(&format!("Created: {}", ctx.config_file.display()));
    }

    if let Err(e) = commands::dispatch(&ctx, &cli.command) {
        ctx.print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
