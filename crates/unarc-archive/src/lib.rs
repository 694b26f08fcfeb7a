//! Extension-dispatched extraction of ZIP, RAR and 7z archives.
//!
//! # Architecture
//!
//! - `extractor.rs` - Validation, classification and dispatch
//! - `format.rs` - Extension table and format classification
//! - `tool.rs` - External `unrar` configuration
//! - `sanitize.rs` - Member name to output path resolution
//! - `extract/` - Per-format decoders and the list-then-filter pipeline
//! - `data/` - Request and report types
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use unarc_archive::Extractor;
//!
//! let extractor = Extractor::with_default_tool()?;
//! let files = extractor.extract("comic.cbr", Some(Path::new("pages")))?;
//! for file in files {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), unarc_archive::Error>(())
//! ```

pub use data::report::ExtractionReport;
pub use data::request::ArchiveRequest;
pub use error::{Error, ErrorKind, Result};
pub use extractor::Extractor;
pub use format::{FormatClass, SUPPORTED_EXTENSIONS, extension_of};
pub use sanitize::resolve_member;
pub use tool::{DEFAULT_UNRAR_PATH, RarTool};

mod data;
mod error;
pub mod extract;
mod extractor;
mod format;
mod sanitize;
mod tool;
