// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "rxpreview.toml";

/// Only supported config format version.
pub const VERSION: u32 = 1;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RXPREVIEW_LOG";

/// Log filter used when [`LOG_ENV`] is unset.
pub const LOG_FILTER: &str = "warn";

/// File extensions of the built-in language tags.
pub mod extensions {
    pub const TABLE: &[(&str, &str)] = &[
        ("js", "javascript"),
        ("cjs", "javascript"),
        ("mjs", "javascript"),
        ("jsx", "javascriptreact"),
        ("ts", "typescript"),
        ("cts", "typescript"),
        ("mts", "typescript"),
        ("tsx", "typescriptreact"),
        ("vue", "vue"),
        ("svelte", "svelte"),
        ("php", "php"),
        ("hx", "haxe"),
    ];
}
