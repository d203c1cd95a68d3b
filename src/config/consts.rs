// src/config/consts.rs

// Page guard
pub const SITE_PREFIX: &str = "https://redeglobo.globo.com/";
pub const EXAMPLE_URL: &str = "https://redeglobo.globo.com/globobrasilia/programacao";

// Dropdown markup
pub const DROPDOWN_TOGGLE_ID: &str = "dropdown-summary__button";
// Same structure as //li[@aria-describedby="dropdown-option-description"]//a
pub const CHANNEL_SELECTOR: &str = r#"li[aria-describedby="dropdown-option-description"] a"#;
pub const LINK_ATTR: &str = "href";

// Net
pub const USER_AGENT: &str = concat!("globo_channels/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Export
pub const DEFAULT_FILE: &str = "channels.json";
pub const PART_EXT: &str = "part";

// Catalog consumers
pub const DEFAULT_CATALOG: &str = "data/channels.json";
pub const DEFAULT_DOCS: &str = "docs/Channels.MD";

// Local diagnostics
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
