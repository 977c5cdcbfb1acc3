mod dashboard;
mod input;
mod logging;
mod model;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::error;

use crate::dashboard::browse::run_browse;
use crate::dashboard::{DashboardState, render};
use crate::input::{DatasetSource, InputError, load_members};
use crate::report::json::render_dashboard_json;
use crate::report::site::{DEFAULT_BASE_PATH, DEFAULT_TITLE, ExportError, SiteConfig, export_site};
use crate::report::text::render_dashboard_text;

#[derive(Debug, Parser)]
#[command(name = "member-scoreboard")]
#[command(about = "Search members and inspect their per-category score bars", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    verbose: bool,
    /// Member dataset as a JSON list; the bundled dataset is used when omitted
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the dashboard for one search/selection
    Show {
        #[arg(long, default_value = "")]
        search: String,
        /// Exact member name to inspect
        #[arg(long)]
        select: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Drive the dashboard from stdin: search <text>, select <name|row>, show, quit
    Browse,
    /// Write the dashboard as a static site
    Render {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = DEFAULT_BASE_PATH)]
        base_path: String,
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("no member named \"{0}\"")]
    UnknownMember(String),
    #[error("failed to encode dashboard: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let state = load_state(cli.data.as_deref())?;

    match cli.command {
        Commands::Show {
            search,
            select,
            format,
        } => {
            let state = apply_show_args(state, search, select.as_deref())?;
            let rendered = render_view(&state, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        Commands::Browse => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            run_browse(state, stdin, &mut stdout)?;
            stdout.flush()?;
        }
        Commands::Render {
            out,
            base_path,
            title,
        } => {
            let site = SiteConfig::new(&base_path, &title);
            let summary = export_site(&state, &site, &out)?;
            println!(
                "Wrote {} pages to {}.",
                summary.pages,
                summary.out_dir.display()
            );
        }
    }

    Ok(())
}

fn load_state(data: Option<&Path>) -> Result<DashboardState, AppError> {
    let members = load_members(&DatasetSource::from_arg(data))?;
    Ok(DashboardState::new(members))
}

fn apply_show_args(
    state: DashboardState,
    search: String,
    select: Option<&str>,
) -> Result<DashboardState, AppError> {
    let state = state.set_search(search);
    match select {
        Some(name) => {
            let member = state
                .find_member(name)
                .cloned()
                .ok_or_else(|| AppError::UnknownMember(name.to_string()))?;
            Ok(state.select_member(member))
        }
        None => Ok(state),
    }
}

fn render_view(state: &DashboardState, format: OutputFormat) -> Result<String, AppError> {
    let view = render(state);
    Ok(match format {
        OutputFormat::Text => render_dashboard_text(&view),
        OutputFormat::Json => render_dashboard_json(&view)?,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
