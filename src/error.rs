//! Unified error types for ecotrack.
//!
//! This module provides the error hierarchy for the library, with chained
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ecotrack operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EcoTrackError {
    /// Malformed or missing request input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced product id did not resolve
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// A product attribute cannot be scored
    #[error("Invalid input for '{field}': {value} (expected a finite, non-negative number)")]
    InvalidInput { field: &'static str, value: f64 },

    /// Errors raised by a catalog collaborator
    #[error("Catalog query failed: {context}: {source}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while reading catalog data
    #[error("Failed to parse catalog: {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Query rejected: {0}")]
    Query(String),

    #[error("Query timed out")]
    Timeout,
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ecotrack operations
pub type Result<T> = std::result::Result<T, EcoTrackError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl EcoTrackError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for a product id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid-input error for a product attribute
    pub const fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for EcoTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for EcoTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, so a
/// failure deep in catalog loading reads as a path through the call stack.
///
/// # Example
///
/// ```ignore
/// use ecotrack::error::ErrorContext;
///
/// let products = catalog
///     .find_by_ids(&ids)
///     .context("resolving cart products")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<EcoTrackError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// `NotFound` and `InvalidInput` carry structured fields only and pass
/// through unchanged.
fn add_context_to_error(err: EcoTrackError, new_ctx: &str) -> EcoTrackError {
    match err {
        EcoTrackError::Catalog {
            context: existing,
            source,
        } => EcoTrackError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EcoTrackError::Parse {
            context: existing,
            source,
        } => EcoTrackError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EcoTrackError::Io {
            path,
            message,
            source,
        } => EcoTrackError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        EcoTrackError::Config(msg) => EcoTrackError::Config(chain_context(new_ctx, &msg)),
        EcoTrackError::Validation(msg) => EcoTrackError::Validation(chain_context(new_ctx, &msg)),
        other @ (EcoTrackError::NotFound { .. } | EcoTrackError::InvalidInput { .. }) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| EcoTrackError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| EcoTrackError::Validation(f().into()))
    }
}
