//! # embedform-core - Core Domain Types
//!
//! Foundation crate for Embedform. Provides the integration/form domain
//! types, the submission status model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConfigSnapshot`] - Immutable integration bundle read once at startup
//! - [`Integration`], [`FormSettings`], [`Callout`] - Integration config
//! - [`Form`], [`FormField`], [`FormDoc`], [`FieldValue`] - Form definition
//!   and submission payload
//! - [`LoadType`] - Widget presentation mode (popup, shoutbox, embedded, ...)
//! - [`SubmissionStatus`], [`FieldError`] - Result of the latest submission
//! - [`BrowserInfo`] - Ambient browser data forwarded with submissions
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverability classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use embedform_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Embedform crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    BrowserInfo, Callout, ConfigSnapshot, FieldError, FieldValue, Form, FormDoc, FormField,
    FormSettings, Integration, LoadType, SubmissionStatus,
};
