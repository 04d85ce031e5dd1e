//! Error types for scope-manifest

use thiserror::Error;

/// Errors that can occur while querying the scope manifest
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("Component name must not be empty")]
    EmptyName,
}
