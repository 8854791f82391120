//! campusclub library root.
//! Exposes the event store, the analytics engine, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::commands::{self, Context};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `debug`.
pub const LOG_ENV: &str = "CAMPUSCLUB_LOG";

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    match cmd {
        Commands::Init => commands::init::handle(ctx),
        Commands::Config { .. } => commands::config::handle(cmd, ctx),
        Commands::List { .. } => commands::list::handle(cmd, ctx, session),
        Commands::Show { .. } => commands::show::handle(cmd, ctx, session),
        Commands::Create { .. } => commands::create::handle(cmd, ctx, session),
        Commands::Volunteer { .. } => commands::volunteer::handle(cmd, ctx, session),
        Commands::Task { .. } => commands::task::handle(cmd, ctx, session),
        Commands::Checkin { .. } => commands::checkin::handle(cmd, ctx, session),
        Commands::Approval { .. } => commands::approval::handle(cmd, ctx, session),
        Commands::Feedback { .. } => commands::feedback::handle(cmd, ctx, session),
        Commands::Metrics { .. } => commands::metrics::handle(cmd, ctx, session),
        Commands::Templates => commands::templates::handle(),
        Commands::Log => commands::log::handle(session),
        Commands::Shell => crate::cli::shell::run(std::io::stdin().lock(), ctx, session),
    }
}

/// Install the stderr tracing subscriber. `CAMPUSCLUB_LOG` wins over the
/// configured level.
pub fn init_logging(cfg: &Config) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let config_path = match &cli.config {
        Some(p) => crate::utils::path::expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;
    init_logging(&cfg);

    // 3️⃣ one session per process
    let mut session = if cli.no_seed || !cfg.seed_demo {
        Session::empty()
    } else {
        Session::seeded()
    };

    let ctx = Context {
        cfg: &cfg,
        config_path,
        strict: cli.strict,
        test: cli.test,
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli.command, &ctx, &mut session)
}
