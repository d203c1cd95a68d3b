// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    catalog::{ChannelCatalog, ChannelMatch},
    config::consts::{DEFAULT_CATALOG, DEFAULT_DOCS},
    config::options::{debug_log_path, AppOptions, SourceOptions},
    docs,
    error::Result,
    file::{resolve_single_out_path, write_via_part},
    logging,
    progress::ConsoleProgress,
    runner::{self, RunOutcome},
};

#[derive(Parser, Debug)]
#[command(name = "globo_channels")]
#[command(about = "Export the Globo programming channel list as channels.json", long_about = None)]
pub struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append diagnostics to .store/debug.log instead of stderr
    #[arg(long, global = true)]
    pub debug_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect the dropdown channels of a programming page and save channels.json
    Extract {
        /// Address of the programming page (e.g. https://redeglobo.globo.com/globobrasilia/programacao)
        #[arg(short, long)]
        url: String,

        /// Read a saved copy of the page instead of fetching --url
        #[arg(long)]
        html: Option<PathBuf>,

        /// Output file, or directory to put channels.json in (default: downloads folder)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Write a Markdown listing of every channel code
    Docs {
        /// channels.json to read
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Markdown file (or directory) to write
        #[arg(short, long, default_value = DEFAULT_DOCS)]
        out: String,
    },

    /// Look a channel up by code
    Find {
        /// Code, or part of one with the default fragment search
        query: String,

        /// channels.json to read
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Only accept an exact code
        #[arg(long)]
        exact: bool,
    },

    /// Print (or save) the programme listing of one channel as JSON
    Programs {
        /// Channel code, as listed by `docs` or `find`
        code: String,

        /// channels.json to read
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Read a saved copy of the channel page instead of fetching it
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

pub fn run() -> Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    let log_file = cli.debug_log.then(debug_log_path);
    logging::init(logging::level_for(cli.verbose), log_file.as_deref())?;

    match cli.command {
        Command::Extract { url, html, out } => extract(url, html, out),
        Command::Docs { catalog, out } => write_docs(&catalog, &out),
        Command::Find { query, catalog, exact } => find(&query, &catalog, exact),
        Command::Programs { code, catalog, html, out } => programs(&code, &catalog, html.as_deref(), out.as_deref()),
    }
}

fn extract(url: String, html: Option<PathBuf>, out: Option<String>) -> Result<()> {
    let mut opts = AppOptions::default();
    opts.source = match html {
        Some(path) => SourceOptions::saved(url, path),
        None => SourceOptions::remote(url),
    };
    if let Some(out) = out {
        opts.export.set_path(&out);
    }

    let mut console = ConsoleProgress;
    match runner::run(&opts, Some(&mut console))? {
        RunOutcome::WrongPage => log::debug!("Nothing exported"),
        RunOutcome::Exported(summary) => log::info!(
            "{} channels → {}",
            summary.channels_found,
            summary.file_written.display()
        ),
    }
    Ok(())
}

fn write_docs(catalog: &Path, out: &str) -> Result<()> {
    let catalog = ChannelCatalog::load(catalog)?;
    let default_name = PathBuf::from(DEFAULT_DOCS)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!(DEFAULT_DOCS));
    let path = resolve_single_out_path(out, &default_name)?;
    docs::write_markdown(&catalog, &path)?;
    println!("{} created successfully.", path.display());
    Ok(())
}

fn find(query: &str, catalog: &Path, exact: bool) -> Result<()> {
    let catalog = ChannelCatalog::load(catalog)?;
    let hits: Vec<ChannelMatch> = if exact {
        catalog.find_channel(query).into_iter().collect()
    } else {
        catalog.find_channels(query)
    };

    if hits.is_empty() {
        println!("No channel matches {query:?}");
        return Ok(());
    }
    for m in &hits {
        println!("{}", match_line(m)?);
    }
    Ok(())
}

/// One hit per line, as a JSON object. Names may hold commas.
pub fn match_line(m: &ChannelMatch) -> Result<String> {
    Ok(serde_json::to_string(m)?)
}

fn programs(code: &str, catalog: &Path, html: Option<&Path>, out: Option<&str>) -> Result<()> {
    let catalog = ChannelCatalog::load(catalog)?;
    let schedule = runner::load_schedule(&catalog, code, html)?;
    let text = serde_json::to_string_pretty(&schedule)?;

    match out {
        None => println!("{text}"),
        Some(out) => {
            let path = resolve_single_out_path(out, &join!(&schedule.code, ".json"))?;
            write_via_part(&path, text.as_bytes())?;
            println!("{} programmes saved in {}", schedule.programs.len(), path.display());
        }
    }
    Ok(())
}
