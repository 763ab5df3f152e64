//! cablegen - FTTH cable record generator
//!
//! Builds the standardized labels and length descriptions that installation
//! records for fiber-optic cable runs require.
//!
//! # Architecture
//!
//! - [`core`] - The three generators (cable name, cluster length, feeder length)
//! - [`validators`] - Form field parsing at the UI/CLI boundary
//! - [`config`] - Persisted UI preferences
//! - [`theme`] - Color palettes for the form window
//! - [`utils`] - XDG directories and result panel helpers
//!
//! # Example
//!
//! ```
//! let report = cablegen::core::generate_feeder_report("500", "1", "530");
//! assert!(report.contains("= 546 M"));
//!
//! let report = cablegen::core::generate_feeder_report("five hundred", "1", "");
//! assert!(report.starts_with("Error:"));
//! ```

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod theme;
pub mod utils;
pub mod validators;

shadow_rs::shadow!(build);

// Re-export commonly used types
pub use core::cable::{CableCategory, CableRecord};
pub use core::error::{Error, Result};
pub use core::slack::{ClusterLengthInput, FeederLengthInput, LengthReport};

/// Version and commit shown in the GUI footer
pub fn version_string() -> String {
    format!("cablegen v{} ({})", build::PKG_VERSION, build::SHORT_COMMIT)
}
