//! Record traversal

use tracing::{debug, debug_span, warn};

use crate::env::{Environment, ProcessEnv};
use crate::error::BindError;
use crate::kind::{self, Bindable, Slot};
use crate::resolve::{self, Directives, Resolution};

/// Transient view of one field, produced by [`EnvBind::fields`].
#[derive(Debug)]
pub struct FieldDescriptor<'a> {
    /// Field name as declared
    pub name: &'static str,
    /// Directives declared on the field
    pub directives: Directives,
    /// Mutable view of the field's value
    pub slot: Slot<'a>,
}

/// A configuration record whose fields can be bound from the environment.
///
/// Normally implemented with `#[derive(EnvBind)]`.
pub trait EnvBind {
    /// Type name of the record.
    fn record_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&mut self) -> Vec<FieldDescriptor<'_>>;

    /// Build the record from `Default::default()` and bind it from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] raised while binding.
    fn from_env() -> anyhow::Result<Self>
    where
        Self: Sized + Default,
    {
        Self::from_env_with(&ProcessEnv)
    }

    /// Like [`EnvBind::from_env`], reading from `env` instead.
    fn from_env_with(env: &dyn Environment) -> anyhow::Result<Self>
    where
        Self: Sized + Default,
    {
        let mut record = Self::default();
        bind_record(&mut record, env)?;
        Ok(record)
    }
}

/// Bind `target` from the process environment.
///
/// See [`bind_with`].
pub fn bind(target: &mut dyn Bindable) -> Result<(), BindError> {
    bind_with(target, &ProcessEnv)
}

/// Bind every field of `target` from `env`, in declaration order.
///
/// Stops at the first failing field. Fields bound before the failure keep
/// their new values.
///
/// # Errors
///
/// - [`BindError::InvalidRoot`] if `target` is not a record
/// - otherwise, the first field error wrapped in one [`BindError::Field`]
///   frame per nesting level
pub fn bind_with(target: &mut dyn Bindable, env: &dyn Environment) -> Result<(), BindError> {
    match target.slot() {
        Slot::Record(record) => bind_record(record, env),
        other => report(Err(BindError::InvalidRoot {
            found: other.kind().name(),
        })),
    }
}

fn bind_record(record: &mut dyn EnvBind, env: &dyn Environment) -> Result<(), BindError> {
    report(walk(record, env))
}

fn report(result: Result<(), BindError>) -> Result<(), BindError> {
    if let Err(err) = &result {
        warn!(error = %err, "failed to bind configuration from environment");
    }
    result
}

fn walk(record: &mut dyn EnvBind, env: &dyn Environment) -> Result<(), BindError> {
    let span = debug_span!("bind_record", record = record.record_name());
    let _enter = span.enter();

    for field in record.fields() {
        let name = field.name;
        bind_field(field, env).map_err(|err| err.in_field(name))?;
    }
    Ok(())
}

fn bind_field(field: FieldDescriptor<'_>, env: &dyn Environment) -> Result<(), BindError> {
    let FieldDescriptor {
        name,
        directives,
        slot,
    } = field;

    let Some(var) = directives.var else {
        return match slot {
            Slot::Record(nested) => walk(nested, env),
            _ => Err(BindError::MissingDirective {
                field: name.to_string(),
            }),
        };
    };

    match resolve::resolve(var, &directives, env)? {
        Resolution::Environment(value) => {
            kind::assign(slot, &value)?;
            debug!(field = name, var, "bound from environment");
        }
        Resolution::Default(value) => {
            kind::assign(slot, value)?;
            debug!(field = name, var, "bound from default");
        }
        Resolution::Skip => {
            debug!(field = name, var, "skipped, no value or default");
        }
    }
    Ok(())
}
