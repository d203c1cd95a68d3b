// src/runner.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    catalog::ChannelCatalog,
    config::consts::{EXAMPLE_URL, SITE_PREFIX},
    config::options::{AppOptions, ExportOptions, SourceOptions},
    core::{dom::Dom, html::HtmlDocument, net},
    error::{ChannelError, Result},
    file,
    progress::Progress,
    specs::channels::{self, ChannelEntry},
    specs::programs::{self, ChannelSchedule},
};

/// How a run ended. Anything else is a `ChannelError`.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The guard rejected the location; nothing was touched.
    WrongPage,
    Exported(RunSummary),
}

#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Channels inserted, overwrites included.
    pub channels_found: usize,
    pub file_written: PathBuf,
}

/// What one pass over the document produced.
#[derive(Debug)]
pub struct Extraction {
    pub catalog: ChannelCatalog,
    pub count: usize,
}

/// Top-level: guard, load the page, extract, export.
pub fn run(opts: &AppOptions, progress: Option<&mut (dyn Progress + '_)>) -> Result<RunOutcome> {
    let mut progress = progress;

    if !channels::check_url(&opts.source.location) {
        report_wrong_page(progress.as_deref_mut());
        return Ok(RunOutcome::WrongPage);
    }

    let html = load_page(&opts.source)?;
    let mut doc = HtmlDocument::parse(&html);
    run_on(&opts.source.location, &mut doc, &opts.export, progress)
}

/// Same as `run`, on a document that is already loaded.
pub fn run_on(
    location: &str,
    dom: &mut dyn Dom,
    export: &ExportOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunOutcome> {
    if !channels::check_url(location) {
        report_wrong_page(progress.as_deref_mut());
        return Ok(RunOutcome::WrongPage);
    }

    let Extraction { catalog, count } = extract(dom, progress.as_deref_mut())?;
    let path = file::export_catalog(&catalog, export)?;

    if let Some(p) = progress.as_deref_mut() {
        let dir = path.parent().map(|d| d.display().to_string()).unwrap_or_default();
        p.log(&format!("File {} saved in {}!", export.file_name(), if dir.is_empty() { s!(".") } else { dir }));
        p.finish();
    }

    Ok(RunOutcome::Exported(RunSummary { channels_found: count, file_written: path }))
}

/// Open the dropdown, read every option, close it again.
pub fn extract(dom: &mut dyn Dom, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<Extraction> {
    channels::reveal(dom)?;
    let elements = channels::collect(&*dom)?;
    log::info!("{} dropdown options matched", elements.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(elements.len());
    }

    let mut catalog = ChannelCatalog::new();
    let mut count = 0;
    for (i, el) in elements.iter().enumerate() {
        let entry = ChannelEntry::from_element(i, el)?;
        if catalog.add_entry(&entry) {
            count += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&entry.code);
            }
        }
    }

    channels::restore(dom)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Channels found: {count}"));
    }
    Ok(Extraction { catalog, count })
}

/// Programme listing for one catalog channel. `html_file` stands in for the
/// live page when given.
pub fn load_schedule(catalog: &ChannelCatalog, code: &str, html_file: Option<&Path>) -> Result<ChannelSchedule> {
    let channel = catalog
        .find_channel(code)
        .ok_or_else(|| ChannelError::UnknownChannel(s!(code)))?;

    let source = SourceOptions {
        location: programs::page_url(&channel.url),
        html_file: html_file.map(Path::to_path_buf),
    };
    let html = load_page(&source)?;
    programs::schedule(&channel, programs::parse_programs(&html)?)
}

fn load_page(source: &SourceOptions) -> Result<String> {
    match &source.html_file {
        Some(path) => {
            log::info!("Reading saved page {} (as {})", path.display(), source.location);
            Ok(fs::read_to_string(path)?)
        }
        None => net::http_get(&source.location),
    }
}

fn report_wrong_page(progress: Option<&mut (dyn Progress + '_)>) {
    log::warn!("Location rejected: not under {SITE_PREFIX}");
    if let Some(p) = progress {
        p.log("You are not on a Globo programming page!");
        p.log("You must be on a page that contains Globo programming");
        p.log(&join!("Example: ", EXAMPLE_URL));
    }
}
