//! # CLI Layer
//!
//! The only place that touches stdout, stderr and stdin. It:
//! 1. parses arguments ([`super::setup`]),
//! 2. installs the `tracing` subscriber,
//! 3. builds the library context ([`preptrackapp::init::initialize`]),
//! 4. dispatches to the API facade,
//! 5. renders the returned `CmdResult` ([`super::render`]).
//!
//! Running `preptrack` with no subcommand shows the status overview.

use super::render;
use super::setup::{Cli, Commands, ConfigCommands};
use clap::Parser;
use console::Term;
use preptrackapp::api::{CmdResult, ConfigAction, ItemFilter, PrepApi};
use preptrackapp::error::{PrepError, Result};
use preptrackapp::export::ExportFormat;
use preptrackapp::init::{initialize, PrepContext};
use preptrackapp::roadmap::STUDY_TIPS;
use preptrackapp::store::ProgressStore;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "PREPTRACK_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "Dispatching");

    let mut ctx = initialize(cli.data.clone())?;
    let use_color = console::colors_enabled();

    match cli.command {
        None => handle_status(&ctx.api, None, false, use_color),
        Some(Commands::List { category, pending }) => {
            let filter = ItemFilter {
                category,
                pending_only: pending,
            };
            let result = ctx.api.list_items(&filter)?;
            print!("{}", render::render_item_list(&result.listed_items, use_color));
            print_messages(&result, use_color);
            Ok(())
        }
        Some(Commands::Toggle { ids }) => {
            let result = ctx.api.toggle_items(&ids)?;
            print_change_summary(&result, use_color);
            Ok(())
        }
        Some(Commands::Complete { ids }) => {
            let result = ctx.api.complete_items(&ids)?;
            print_change_summary(&result, use_color);
            Ok(())
        }
        Some(Commands::Reopen { ids }) => {
            let result = ctx.api.reopen_items(&ids)?;
            print_change_summary(&result, use_color);
            Ok(())
        }
        Some(Commands::Status { category, json }) => {
            handle_status(&ctx.api, category.as_deref(), json, use_color)
        }
        Some(Commands::Categories) => {
            let result = ctx.api.status(None)?;
            print!(
                "{}",
                render::render_categories(
                    ctx.api.tracker().categories(),
                    &result.category_progress,
                    use_color
                )
            );
            Ok(())
        }
        Some(Commands::Roadmap { tips }) => {
            let result = ctx.api.roadmap()?;
            print!("{}", render::render_roadmap(&result.phases, tips, use_color));
            if tips {
                println!();
                print!("{}", render::render_study_tips(STUDY_TIPS, use_color));
            }
            Ok(())
        }
        Some(Commands::Export {
            format,
            output,
            stdout,
        }) => handle_export(&ctx.api, &format, output, stdout),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes, use_color),
        Some(Commands::Config { action }) => handle_config(&ctx, action, use_color),
    }
}

/// Logs go to stderr so exports on stdout stay clean.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .try_init();
}

fn print_messages(result: &CmdResult, use_color: bool) {
    print!("{}", render::render_messages(&result.messages, use_color));
}

fn print_change_summary(result: &CmdResult, use_color: bool) {
    print_messages(result, use_color);
    if let Some(overall) = &result.overall {
        println!(
            "Overall: {}/{} ({}%)",
            overall.completed, overall.total, overall.percentage
        );
    }
}

fn handle_status<S: ProgressStore>(
    api: &PrepApi<S>,
    category: Option<&str>,
    json: bool,
    use_color: bool,
) -> Result<()> {
    let result = api.status(category)?;
    let overall = result.overall.unwrap_or_default();
    if json {
        println!(
            "{}",
            render::status_json(&overall, &result.category_progress)?
        );
    } else {
        print!(
            "{}",
            render::render_status(&overall, &result.category_progress, use_color)
        );
    }
    Ok(())
}

fn handle_export<S: ProgressStore>(
    api: &PrepApi<S>,
    format: &str,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let result = api.export(format)?;
    let export = result
        .export
        .ok_or_else(|| PrepError::Api("Export produced no content".to_string()))?;

    if stdout {
        print!("{}", export.content);
        if !export.content.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(format.default_filename()));
    fs::write(&path, &export.content)?;
    println!("Exported {} to {}", format, path.display());
    Ok(())
}

fn handle_reset(ctx: &mut PrepContext, yes: bool, use_color: bool) -> Result<()> {
    if !yes && !confirm("Reset all progress? This cannot be undone. [y/N] ")? {
        println!("Reset cancelled.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print_messages(&result, use_color);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(prompt)?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_config(ctx: &PrepContext, action: Option<ConfigCommands>, use_color: bool) -> Result<()> {
    match action {
        None => {
            let result = ctx.api.config(ConfigAction::ShowAll)?;
            let config = result.config.unwrap_or_else(|| ctx.config.clone());
            println!("# data directory: {}", ctx.data_dir.display());
            print!("{}", render::render_config(&config.entries(), use_color));
        }
        Some(ConfigCommands::Gen) => {
            let result = ctx.api.config(ConfigAction::Template)?;
            for message in result.messages {
                println!("{}", message.content);
            }
        }
    }
    Ok(())
}
