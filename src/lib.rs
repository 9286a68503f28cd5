//! Parse single-line, Java-like method signatures into structured records.
//!
//! ```rust
//! use sigparse::{parse, Argument};
//!
//! let sig = parse("Vector3 distort(int x, int y, int z, float magnitude)").unwrap();
//! assert_eq!(sig.access_modifier(), None);
//! assert_eq!(sig.return_type(), "Vector3");
//! assert_eq!(sig.arguments()[3], Argument::new("float", "magnitude"));
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod parser;

// Re-export commonly used types
pub use crate::batch::{parse_lines, parse_text, BatchReport, LineOutcome};
pub use crate::config::{load_config, SigparseConfig};
pub use crate::core::{Argument, MethodSignature};
pub use crate::errors::{ErrorCode, ParseError, TokenPosition};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::parser::parse;
