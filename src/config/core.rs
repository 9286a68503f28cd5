use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".sigparse.toml";

fn default_comment_prefix() -> String {
    "#".to_string()
}

fn default_true() -> bool {
    true
}

/// Root configuration structure for sigparse
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SigparseConfig {
    /// How signature lines are read from files and stdin
    #[serde(default)]
    pub input: InputConfig,

    /// Batch parsing behavior
    #[serde(default)]
    pub batch: BatchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Lines starting with this prefix are skipped (default: "#").
    /// An empty prefix disables comment skipping.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Skip lines that are empty after trimming (default: true)
    #[serde(default = "default_true")]
    pub skip_blank_lines: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
            skip_blank_lines: true,
        }
    }
}

impl InputConfig {
    /// Rules that skip nothing, for signatures given directly on the command line.
    pub fn verbatim() -> Self {
        Self {
            comment_prefix: String::new(),
            skip_blank_lines: false,
        }
    }

    /// Whether a raw input line should be ignored rather than parsed.
    pub fn is_skipped(&self, line: &str) -> bool {
        let trimmed = line.trim();
        (self.skip_blank_lines && trimmed.is_empty())
            || (!self.comment_prefix.is_empty() && trimmed.starts_with(&self.comment_prefix))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchConfig {
    /// Parse lines on the rayon pool (default: true)
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Stop at the first line that fails to parse (default: false)
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored terminal output (default: auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}
