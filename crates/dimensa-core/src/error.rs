//! Error types for catalog construction and dimension algebra

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalog and the algebra built on it.
///
/// None of these are transient. `Incommensurable` means the requested
/// operation has no dimensional meaning; the rest point at bad input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Catalog integrity error: {0}")]
    CatalogIntegrity(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Incommensurable quantities: [{left}] and [{right}]")]
    Incommensurable { left: String, right: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown {kind}: {key}")]
    UnknownKey { kind: &'static str, key: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot take {operation} of a dimension with power {power}")]
    OddPower { operation: &'static str, power: i32 },

    #[error("Power {power} raised to {exponent} is out of range")]
    PowerOverflow { power: i32, exponent: i32 },
}

/// Precondition violations inside unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Cannot convert from a non-base dimension ({unit})")]
    NotBaseDimension { unit: String },

    #[error("Unit {unit} has offset {offset} but the value does not support scalar addition")]
    UnsupportedOffset { unit: String, offset: f64 },

    #[error("Cannot combine {left} with {right}: different dimension definitions")]
    DefinitionMismatch { left: String, right: String },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, key: impl Into<String>) -> Self {
        Error::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn integrity(msg: impl Into<String>) -> Self {
        Error::CatalogIntegrity(msg.into())
    }
}
