//! # CLI Layer
//!
//! One UI client for statz. This is the only place that parses arguments,
//! writes to stdout/stderr and sets up logging; everything else goes
//! through [`StatzApi`](statz::api::StatzApi).
//!
//! - `run()`: parse, set up logging, build the context, dispatch
//! - `handle_*()`: call the API and print the result

use super::render::{colors_supported, print_messages, render_status, render_types};
use super::setup::{Cli, Commands};
use chrono::Local;
use clap::Parser;
use statz::api::StatzApi;
use statz::error::Result;
use statz::init::{initialize, resolve_data_dir, HOME_ENV};
use statz::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STATZ_LOG";

struct AppContext {
    api: StatzApi<FileStore>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Status { date }) => handle_status(&ctx, date),
        Some(Commands::Log {
            kind,
            entries,
            time,
        }) => handle_log(&mut ctx, kind, entries, time),
        Some(Commands::Types) => handle_types(&ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_status(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("statz=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so the table on stdout stays pipeable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = std::env::var(HOME_ENV).ok();

    let data_dir = resolve_data_dir(&cwd, cli.data_dir.as_deref(), cli.global, home.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let ctx = initialize(data_dir)?;
    Ok(AppContext {
        api: ctx.api,
        use_color: colors_supported(),
    })
}

fn handle_status(ctx: &AppContext, date: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let result = ctx.api.status(date.as_deref(), today)?;
    println!("{}", render_status(&result.status_rows, ctx.use_color));
    print_messages(&result.messages);
    Ok(())
}

fn handle_log(
    ctx: &mut AppContext,
    kind: String,
    entries: Vec<String>,
    time: Option<String>,
) -> Result<()> {
    let result = ctx.api.log_action(&kind, &entries, time.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_types(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.types()?;
    if !result.listed_types.is_empty() {
        println!("{}", render_types(&result.listed_types, ctx.use_color));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
