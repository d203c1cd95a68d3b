// src/lib.rs

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod docs;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod specs;

pub use catalog::{Category, Channel, ChannelCatalog, ChannelMatch};
pub use error::{ChannelError, Result};
