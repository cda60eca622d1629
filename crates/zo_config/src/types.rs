//! Configuration types deserialized from `zolang.toml`.

use serde::Deserialize;

/// The top-level front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    /// Scanner behaviour.
    #[serde(default)]
    pub scanner: ScannerConfig,
    /// Diagnostic reporting.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Settings applied by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// When set, comments are skipped instead of returned as tokens.
    #[serde(default)]
    pub skip_comments: bool,
}

/// Settings applied when reporting a collected error list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// How many errors a report shows before summarizing the rest.
    #[serde(default = "default_max_displayed")]
    pub max_displayed: usize,
    /// Keep only the first error reported on each line. Deduplication
    /// needs position order, so this implies sorting.
    #[serde(default = "default_true")]
    pub one_per_line: bool,
    /// Order errors by position before reporting; when unset (and
    /// `one_per_line` is unset) errors are reported in the order found.
    #[serde(default = "default_true")]
    pub sorted: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            max_displayed: default_max_displayed(),
            one_per_line: true,
            sorted: true,
        }
    }
}

fn default_max_displayed() -> usize {
    10
}

fn default_true() -> bool {
    true
}
