//! Base error type.
//!
//! Deliberately small: the engine clamps bad environmental input instead of
//! rejecting it (see [`env`][crate::env]), so very little in this crate can
//! actually fail.  Downstream crates define their own enums and wrap this
//! one where needed.

use thiserror::Error;

/// Errors from the core types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown scenario preset '{0}'")]
    UnknownPreset(String),
}

/// Shorthand result type for `patina-core`.
pub type CoreResult<T> = Result<T, CoreError>;
