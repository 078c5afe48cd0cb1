//! flowts_options: flowts.json parsing and print options.
//!
//! `PrintConfig` is what the printer consults while rendering types.
//! `FlowTsOptions` is the project file the command line reads; every field is
//! optional and falls back to a default when absent.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Options that change how individual types render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintConfig {
    /// Spell the absent half of `?T` as `ReactNull` instead of `undefined`.
    pub use_react_null: bool,
}

/// Default extension for printed files.
pub const DEFAULT_OUT_EXTENSION: &str = ".ts";

/// The flowts.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTsOptions {
    pub use_react_null: Option<bool>,
    pub force_export: Option<bool>,
    pub out_dir: Option<String>,
    pub out_extension: Option<String>,
}

impl FlowTsOptions {
    pub fn print_config(&self) -> PrintConfig {
        PrintConfig {
            use_react_null: self.use_react_null.unwrap_or(false),
        }
    }

    pub fn force_export(&self) -> bool {
        self.force_export.unwrap_or(false)
    }

    pub fn out_extension(&self) -> &str {
        self.out_extension.as_deref().unwrap_or(DEFAULT_OUT_EXTENSION)
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merge(self, other: FlowTsOptions) -> FlowTsOptions {
        FlowTsOptions {
            use_react_null: other.use_react_null.or(self.use_react_null),
            force_export: other.force_export.or(self.force_export),
            out_dir: other.out_dir.or(self.out_dir),
            out_extension: other.out_extension.or(self.out_extension),
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cannot read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a flowts.json file from a string.
pub fn parse_options(content: &str) -> Result<FlowTsOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a flowts.json file from a path.
pub fn parse_options_file(path: impl AsRef<Path>) -> Result<FlowTsOptions, OptionsError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: display.clone(),
        source,
    })?;
    parse_options(&content).map_err(|source| OptionsError::Json { path: display, source })
}
