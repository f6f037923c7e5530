//! Error types for phrase construction, layout and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Polygon operation received fewer than three vertices
    ///
    /// Signals a layout defect rather than bad luck in sampling, so it is
    /// never retried locally
    MalformedPolygon {
        /// Operation that rejected the vertex list
        operation: &'static str,
        /// Number of vertices that were supplied
        vertices: usize,
    },

    /// Operator applied to operands outside its declared contract
    InvalidComposition {
        /// Name of the transformer, composer or action involved
        operator: String,
        /// Explanation of the mismatch
        reason: String,
    },

    /// Renderer met a word it has no geometric meaning for
    UnknownWord {
        /// Whether the word was expected to name a shape or a relation
        category: &'static str,
        /// The word itself
        word: String,
    },

    /// Renderer met a phrase structure it cannot lay out
    UnsupportedNode {
        /// Functional form of the offending node
        node: String,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered picture to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPolygon {
                operation,
                vertices,
            } => {
                write!(
                    f,
                    "Malformed polygon in {operation}: {vertices} vertices (need at least 3)"
                )
            }
            Self::InvalidComposition { operator, reason } => {
                write!(f, "Invalid composition with '{operator}': {reason}")
            }
            Self::UnknownWord { category, word } => {
                write!(f, "Unknown {category} '{word}'")
            }
            Self::UnsupportedNode { node } => {
                write!(f, "Cannot lay out phrase '{node}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl From<image::ImageError> for GeneratorError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid composition error
pub fn invalid_composition(operator: &impl ToString, reason: &impl ToString) -> GeneratorError {
    GeneratorError::InvalidComposition {
        operator: operator.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed polygon error unless at least three vertices are present
///
/// # Errors
///
/// Returns [`GeneratorError::MalformedPolygon`] when `vertices < 3`
pub fn require_polygon(operation: &'static str, vertices: usize) -> Result<()> {
    if vertices < 3 {
        Err(GeneratorError::MalformedPolygon {
            operation,
            vertices,
        })
    } else {
        Ok(())
    }
}
