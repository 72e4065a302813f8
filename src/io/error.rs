//! Error types and context for build plan generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all build plan operations
#[derive(Debug)]
pub enum PlanError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Palette table is inconsistent
    InvalidPalette {
        /// Description of the inconsistency
        reason: String,
    },

    /// Pattern contains symbols the palette cannot resolve (strict mode only)
    UnmappedSymbols {
        /// Each unmapped symbol with its occurrence count
        symbols: Vec<(char, usize)>,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode the blueprint image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to encode or decode the structured export
    Serialization {
        /// Path of the document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML for the expected schema
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Structured export parsed but does not describe a consistent plan
    MalformedExport {
        /// Description of what's wrong with the document
        reason: String,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPalette { reason } => write!(f, "Invalid palette: {reason}"),
            Self::UnmappedSymbols { symbols } => {
                let listed = symbols
                    .iter()
                    .map(|(symbol, count)| format!("'{symbol}' x{count}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Pattern contains unmapped symbols: {listed}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "JSON serialization error for '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedExport { reason } => write!(f, "Malformed plan export: {reason}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for build plan results
pub type Result<T> = std::result::Result<T, PlanError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`PlanError::FileSystem`] naming the path and operation
    ///
    /// # Errors
    ///
    /// Propagates the original error with path context applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| PlanError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlanError {
    PlanError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(reason: &impl ToString) -> PlanError {
    PlanError::InvalidPalette {
        reason: reason.to_string(),
    }
}
