//! Field kinds, coercion and validation

use std::fmt;

use crate::error::{BindError, ValidationError};
use crate::record::EnvBind;

/// Declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Signed integer, stored as `i64`
    Integer,
    /// UTF-8 text, stored as `String`
    Text,
    /// Nested record, identified by its type name
    Record(&'static str),
    /// A type with no coercion rule, identified by its type name
    Unsupported(&'static str),
}

impl Kind {
    /// Type name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "i64",
            Self::Text => "String",
            Self::Record(name) | Self::Unsupported(name) => *name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable, kind-tagged view of a single field.
pub enum Slot<'a> {
    Integer(&'a mut i64),
    Text(&'a mut String),
    Record(&'a mut dyn EnvBind),
    Unsupported(&'static str),
}

impl Slot<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Text(_) => Kind::Text,
            Self::Record(record) => Kind::Record(record.record_name()),
            Self::Unsupported(name) => Kind::Unsupported(*name),
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// Types that can appear as a field of a bindable record.
///
/// Implemented for `i64`, `String`, every `#[derive(EnvBind)]` record, and
/// the remaining primitive types (which report themselves as unsupported).
pub trait Bindable {
    /// Expose `self` as a slot the binding engine can assign into.
    fn slot(&mut self) -> Slot<'_>;
}

impl Bindable for i64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Integer(self)
    }
}

impl Bindable for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

macro_rules! impl_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(stringify!($ty))
                }
            }
        )*
    };
}

impl_unsupported!(bool, char, i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Coerce `candidate` into the slot, then validate the assigned value.
pub(crate) fn assign(mut slot: Slot<'_>, candidate: &str) -> Result<(), BindError> {
    coerce(&mut slot, candidate)?;
    validate(&slot)?;
    Ok(())
}

fn coerce(slot: &mut Slot<'_>, candidate: &str) -> Result<(), BindError> {
    match slot {
        Slot::Integer(value) => {
            **value = candidate
                .parse::<i64>()
                .map_err(|e| BindError::Coercion {
                    value: candidate.to_string(),
                    kind: Kind::Integer,
                    message: e.to_string(),
                })?;
        }
        Slot::Text(value) => {
            **value = candidate.to_string();
        }
        Slot::Record(record) => {
            return Err(BindError::UnsupportedKind {
                kind: record.record_name(),
            });
        }
        Slot::Unsupported(kind) => {
            return Err(BindError::UnsupportedKind { kind: *kind });
        }
    }
    Ok(())
}

fn validate(slot: &Slot<'_>) -> Result<(), ValidationError> {
    match slot {
        Slot::Integer(value) if **value <= 0 => Err(ValidationError::new("must be positive")),
        Slot::Text(value) if value.is_empty() => Err(ValidationError::new("must not be empty")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_integer() {
        let mut port = 0i64;
        assign(port.slot(), "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_assign_integer_with_plus_sign() {
        let mut port = 0i64;
        assign(port.slot(), "+42").unwrap();
        assert_eq!(port, 42);
    }

    #[test]
    fn test_integer_whitespace_is_not_trimmed() {
        let mut port = 7i64;
        let err = assign(port.slot(), " 8080").unwrap_err();
        match err {
            BindError::Coercion { value, kind, .. } => {
                assert_eq!(value, " 8080");
                assert_eq!(kind, Kind::Integer);
            }
            other => panic!("Expected Coercion error, got {other:?}"),
        }
        assert_eq!(port, 7);
    }

    #[test]
    fn test_integer_overflow_is_coercion_error() {
        let mut port = 0i64;
        let err = assign(port.slot(), "99999999999999999999").unwrap_err();
        assert!(matches!(err, BindError::Coercion { .. }));
    }

    #[test]
    fn test_non_positive_integer_fails_validation_after_assignment() {
        for text in ["-8080", "0"] {
            let mut port = 1i64;
            let err = assign(port.slot(), text).unwrap_err();
            match err {
                BindError::Validation(e) => assert_eq!(e.message(), "must be positive"),
                other => panic!("Expected Validation error, got {other:?}"),
            }
            // The value was assigned before validation ran
            assert_eq!(port.to_string(), text);
        }
    }

    #[test]
    fn test_assign_text_is_identity() {
        let mut host = String::from("old");
        assign(host.slot(), "kafka1:9092,kafka2:9092").unwrap();
        assert_eq!(host, "kafka1:9092,kafka2:9092");
    }

    #[test]
    fn test_empty_text_fails_validation() {
        let mut host = String::from("old");
        let err = assign(host.slot(), "").unwrap_err();
        match err {
            BindError::Validation(e) => assert_eq!(e.message(), "must not be empty"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_kinds_carry_type_name() {
        let mut flag = false;
        let err = assign(flag.slot(), "true").unwrap_err();
        assert!(matches!(err, BindError::UnsupportedKind { kind: "bool" }));

        let mut port = 0u16;
        let err = assign(port.slot(), "8080").unwrap_err();
        assert!(matches!(err, BindError::UnsupportedKind { kind: "u16" }));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(0i64.slot().kind().to_string(), "i64");
        assert_eq!(String::new().slot().kind().to_string(), "String");
        assert_eq!(0.5f64.slot().kind(), Kind::Unsupported("f64"));
    }
}
