use crate::errors::{ConversionError, ErrorKind, ProgramError};

/// Shared capability of every error kind, usable behind `dyn`.
///
/// Dispatch resolves to the concrete value, so a `Rc<dyn Describe>` holding a
/// `CannotCastToInterface` still reports "Cannot cast to interface".
pub trait Describe {
    fn describe(&self) -> &'static str;

    fn kind(&self) -> ErrorKind;
}

impl Describe for ProgramError {
    fn describe(&self) -> &'static str {
        ProgramError::describe(self)
    }

    fn kind(&self) -> ErrorKind {
        ProgramError::kind(self)
    }
}

impl Describe for ConversionError {
    fn describe(&self) -> &'static str {
        ConversionError::describe(self)
    }

    fn kind(&self) -> ErrorKind {
        ConversionError::kind(self)
    }
}
