//! Error types for board extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for board extraction operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while extracting a board model.
///
/// Every variant is fatal to the run: the tool is a one-shot batch
/// conversion, so the appropriate response to a malformed board file is a
/// descriptive abort, not a partial diagram.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Failed to open or read the board file.
    #[error("Failed to read board file: {path}")]
    FileRead {
        /// Path to the board file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The board file is not well-formed XML.
    #[error("Failed to parse board XML")]
    Xml {
        /// Underlying XML error.
        #[source]
        source: roxmltree::Error,
    },

    /// A required layer definition (Dimension/Top/Bottom) is absent.
    #[error("Could not find layer definition: {name}")]
    MissingLayer {
        /// Name of the missing layer.
        name: String,
    },

    /// The dimension layer does not carry a usable board outline.
    #[error("Malformed board outline: {message}")]
    MalformedBoard {
        /// Description of what's wrong.
        message: String,
    },

    /// A required attribute is absent on an element being processed.
    #[error("Element <{element}> is missing attribute '{attr}'")]
    MissingAttribute {
        /// Tag name of the element.
        element: &'static str,
        /// Name of the missing attribute.
        attr: &'static str,
    },

    /// A required numeric attribute failed to parse as a finite number.
    #[error("Attribute '{attr}' has non-numeric value '{value}'")]
    BadAttribute {
        /// Name of the attribute.
        attr: &'static str,
        /// The offending attribute value.
        value: String,
    },

    /// An element references a package name with no matching definition.
    #[error("Could not find package definition: {name}")]
    UnresolvedPackage {
        /// The unresolved package reference.
        name: String,
    },

    /// A rotation descriptor does not match the `[M]R<degrees>` grammar.
    #[error("Could not parse rotation descriptor '{descriptor}'")]
    BadAngle {
        /// The offending descriptor text.
        descriptor: String,
    },
}

impl BoardError {
    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing layer error.
    pub fn missing_layer(name: impl Into<String>) -> Self {
        Self::MissingLayer { name: name.into() }
    }

    /// Creates a malformed board error.
    pub fn malformed_board(message: impl Into<String>) -> Self {
        Self::MalformedBoard {
            message: message.into(),
        }
    }

    /// Creates a missing attribute error.
    #[must_use]
    pub const fn missing_attribute(element: &'static str, attr: &'static str) -> Self {
        Self::MissingAttribute { element, attr }
    }

    /// Creates a bad attribute error.
    pub fn bad_attribute(attr: &'static str, value: impl Into<String>) -> Self {
        Self::BadAttribute {
            attr,
            value: value.into(),
        }
    }

    /// Creates an unresolved package error.
    pub fn unresolved_package(name: impl Into<String>) -> Self {
        Self::UnresolvedPackage { name: name.into() }
    }

    /// Creates a bad angle error.
    pub fn bad_angle(descriptor: impl Into<String>) -> Self {
        Self::BadAngle {
            descriptor: descriptor.into(),
        }
    }
}

impl From<roxmltree::Error> for BoardError {
    fn from(source: roxmltree::Error) -> Self {
        Self::Xml { source }
    }
}
