//! Error types for environment variable binding

use crate::kind::Kind;

/// Errors that can occur when binding a record from environment variables.
///
/// Every error is terminal for the current call. Errors raised while binding
/// a field are wrapped in a [`BindError::Field`] frame naming that field, one
/// frame per nesting level, so the outermost error reads as a path from the
/// root record down to the failing field.
///
/// Frames print their cause inline and do not expose it through
/// [`std::error::Error::source`]; use [`BindError::root_cause`] instead.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The binding target is not a record.
    ///
    /// Raised before any field is touched.
    #[error("expected a mutable reference to a record, got {found}")]
    InvalidRoot {
        /// Kind of the value that was passed instead
        found: &'static str,
    },

    /// A scalar field declares no `var` directive.
    #[error("no `var` directive on scalar field '{field}'")]
    MissingDirective {
        /// Name of the field lacking the directive
        field: String,
    },

    /// A field marked `required` has no value in the environment.
    ///
    /// Defaults never mask this error.
    #[error("required environment variable {name} is empty")]
    RequiredValueMissing {
        /// Name of the environment variable that was looked up
        name: String,
    },

    /// The bind candidate could not be parsed into the field's kind.
    #[error("failed to parse {value:?} as {kind}: {message}")]
    Coercion {
        /// Original text of the bind candidate
        value: String,
        /// Kind that parsing was attempted for
        kind: Kind,
        /// Error message from the parser
        message: String,
    },

    /// A freshly assigned value failed its post-assignment check.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// The field's kind has no coercion rule.
    #[error("unsupported field kind: {kind}")]
    UnsupportedKind {
        /// Name of the declared kind (e.g. `bool`)
        kind: &'static str,
    },

    /// Context frame naming the field an inner error occurred in.
    #[error("{field}: {cause}")]
    Field {
        /// Name of the field being bound
        field: String,
        /// Error raised while binding the field
        cause: Box<BindError>,
    },
}

impl From<ValidationError> for BindError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl BindError {
    /// Wrap this error in a frame naming `field`.
    pub(crate) fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            cause: Box::new(self),
        }
    }

    /// Innermost error, with every [`BindError::Field`] frame peeled off.
    pub fn root_cause(&self) -> &BindError {
        let mut current = self;
        while let Self::Field { cause, .. } = current {
            current = cause;
        }
        current
    }

    /// Field names from the root record down to the failing field.
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Field { field, cause } = current {
            path.push(field.as_str());
            current = cause;
        }
        path
    }
}

/// A post-assignment semantic check that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// Human-readable description of the violated rule.
    pub fn message(&self) -> &'static str {
        self.message
    }
}
