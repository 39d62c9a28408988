// Public modules
pub mod config;
pub mod error;
pub mod ident;
pub mod license;
pub mod local_files;
pub mod project;
pub mod scaffold;
pub mod template;

// Internal modules - not part of public API
pub(crate) mod paths;
pub(crate) mod templates;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
