//! Domain models and types for Vigil.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Event context** ([`EventContext`], [`EventKind`])
//! - **Changed-file models** ([`ChangedFile`], [`FileContent`])
//! - **Error types** ([`VigilError`], [`GitHubError`], [`ScanError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VigilError>`]:
//!
//! ```rust
//! use vigil::domain::{Result, VigilError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = vigil::config::load_config("vigil.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod event;
pub mod files;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{GitHubError, ScanError, VigilError};
pub use event::{EventContext, EventKind};
pub use files::{ChangedFile, FileContent};
pub use result::Result;
