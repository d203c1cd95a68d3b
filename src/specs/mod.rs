// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge lives here: *where the ground truth sits in the
//! markup* and *how to read it*. Each spec is constrained to one page.
//!
//! ## What lives here
//! - **The page guard** (which addresses count as the right page).
//! - **The programme listing** of a single channel page (`programs`).
//! - **Selector choice** (the dropdown toggle id, the structural query for the
//!   channel anchors, the link attribute).
//! - **Per-element extraction** into small entry structs, using `core::sanitize`
//!   for slugs.
//!
//! ## What does **not** live here
//! - **Fetching or parsing** the page (`core::net`, `core::html`).
//! - **Aggregation** into the catalog (`catalog`) and the run order (`runner`).
//! - **Export formatting** (`file`, `docs`).
//!
//! ## Typical call chain
//! ```text
//! CLI → runner::run → specs::channels::check_url
//!                   → specs::channels::{reveal, collect, restore} on a Dom
//!                   → catalog::ChannelCatalog::add_entry
//!                   → file::export_catalog
//!
//! CLI → runner::load_schedule → catalog::ChannelCatalog::find_channel
//!                             → specs::programs::{parse_programs, schedule}
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against saved HTML or hand-built
//!   `ElementSnapshot`s.
pub mod channels;
pub mod programs;
