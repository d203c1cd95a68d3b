// src/docs.rs
// Markdown listing of every channel code, one section per category.

use std::path::Path;

use crate::catalog::ChannelCatalog;
use crate::error::Result;
use crate::file;

pub const TITLE: &str = "# Canais Disponíveis";

pub fn render_markdown(catalog: &ChannelCatalog) -> String {
    let mut md = join!(TITLE, "\n\n");

    for (_, category) in catalog.categories() {
        md.push_str(&format!("## {}\n", category.name));
        for (code, channel) in &category.channels {
            md.push_str(&format!("- {}: ```{}```\n", channel.name, code));
        }
        md.push('\n');
    }
    md
}

pub fn write_markdown(catalog: &ChannelCatalog, path: &Path) -> Result<()> {
    let md = render_markdown(catalog);
    file::write_via_part(path, md.as_bytes())?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
