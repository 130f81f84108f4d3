use std::fmt;
use thiserror::Error;

// =============================================================================
// Milestone 1: Error kinds as a generalization tree
// =============================================================================

/// Flat tag for every kind in the taxonomy.
///
/// ```text
/// ProgramError
/// ├── InsufficientPrivilegesError
/// └── ConversionError
///     ├── CannotConvertValueError
///     └── CannotCastToInterfaceError
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Program,
    InsufficientPrivileges,
    Conversion,
    CannotConvertValue,
    CannotCastToInterface,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Program,
        ErrorKind::InsufficientPrivileges,
        ErrorKind::Conversion,
        ErrorKind::CannotConvertValue,
        ErrorKind::CannotCastToInterface,
    ];

    /// The next more general kind, `None` for the root.
    pub fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::Program => None,
            ErrorKind::InsufficientPrivileges | ErrorKind::Conversion => Some(ErrorKind::Program),
            ErrorKind::CannotConvertValue | ErrorKind::CannotCastToInterface => {
                Some(ErrorKind::Conversion)
            }
        }
    }

    /// Walks from `self` up to the root, `self` included.
    pub fn ancestors(self) -> impl Iterator<Item = ErrorKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// True when a handler for `ancestor` would intercept this kind.
    pub fn is_kind_of(self, ancestor: ErrorKind) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Program => "ProgramError",
            ErrorKind::InsufficientPrivileges => "InsufficientPrivilegesError",
            ErrorKind::Conversion => "ConversionError",
            ErrorKind::CannotConvertValue => "CannotConvertValueError",
            ErrorKind::CannotCastToInterface => "CannotCastToInterfaceError",
        }
    }

    /// Fixed description of the kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Program => "Program error",
            ErrorKind::InsufficientPrivileges => "Insufficient privileges",
            ErrorKind::Conversion => "Conversion error",
            ErrorKind::CannotConvertValue => "Cannot convert value",
            ErrorKind::CannotCastToInterface => "Cannot cast to interface",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Milestone 2: thiserror enums mirroring the tree
// =============================================================================

/// Intermediate kind. `General` is a plain conversion failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    #[error("Conversion error")]
    General,
    #[error("Cannot convert value")]
    CannotConvertValue,
    #[error("Cannot cast to interface")]
    CannotCastToInterface,
}

impl ConversionError {
    pub fn conversion() -> Self {
        Self::General
    }

    pub fn cannot_convert_value() -> Self {
        Self::CannotConvertValue
    }

    pub fn cannot_cast_to_interface() -> Self {
        Self::CannotCastToInterface
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::General => ErrorKind::Conversion,
            ConversionError::CannotConvertValue => ErrorKind::CannotConvertValue,
            ConversionError::CannotCastToInterface => ErrorKind::CannotCastToInterface,
        }
    }

    pub fn describe(&self) -> &'static str {
        self.kind().message()
    }
}

/// Root kind. Every other kind converts into it, so `?` widens a specific
/// failure to a `ProgramError` without losing its message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramError {
    #[error("Program error")]
    General,
    #[error("Insufficient privileges")]
    InsufficientPrivileges,
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ProgramError {
    pub fn program() -> Self {
        Self::General
    }

    pub fn insufficient_privileges() -> Self {
        Self::InsufficientPrivileges
    }

    pub fn conversion() -> Self {
        Self::Conversion(ConversionError::General)
    }

    pub fn cannot_convert_value() -> Self {
        Self::Conversion(ConversionError::CannotConvertValue)
    }

    pub fn cannot_cast_to_interface() -> Self {
        Self::Conversion(ConversionError::CannotCastToInterface)
    }

    /// Most specific kind, never an ancestor.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgramError::General => ErrorKind::Program,
            ProgramError::InsufficientPrivileges => ErrorKind::InsufficientPrivileges,
            ProgramError::Conversion(inner) => inner.kind(),
        }
    }

    pub fn describe(&self) -> &'static str {
        self.kind().message()
    }

    /// Narrows to the conversion branch of the tree.
    pub fn as_conversion(&self) -> Option<&ConversionError> {
        match self {
            ProgramError::Conversion(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Raises a `CannotConvertValueError` typed as its intermediate kind.
pub fn fail_with_cannot_convert_value() -> Result<(), ConversionError> {
    Err(ConversionError::cannot_convert_value())
}
