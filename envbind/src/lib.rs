//! Typed, validated configuration records bound from environment variables
//!
//! `envbind` fills a configuration struct in place from process environment
//! variables, driven by per-field `#[env(...)]` directives. Environment
//! variables are the only source: nothing is read from files or the network.
//!
//! # Features
//!
//! - **Declarative**: Field descriptor tables generated with `#[derive(EnvBind)]`
//! - **Nested records**: Fields without a `var` directive that are records are bound recursively
//! - **Explicit precedence**: environment value, then `required`, then `default`, then skip
//! - **Validated**: Freshly assigned values are checked before the walk moves on
//! - **Structured errors**: One context frame per field level, no string re-formatting
//!
//! # Field Kinds
//!
//! | Rust type | Parsing                          | Validation         |
//! |-----------|----------------------------------|--------------------|
//! | `i64`     | base-10 `str::parse`, no trimming | must be positive   |
//! | `String`  | taken as-is                      | must not be empty  |
//! | record    | bound recursively                | per field          |
//!
//! Other primitive types (`bool`, `u16`, `f64`, ...) may be declared but fail
//! with [`BindError::UnsupportedKind`] when a value is bound into them.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env(var = "APP_PORT", default = "8080")]
//!     pub port: i64,
//!
//!     #[env(var = "APP_NAME", required)]
//!     pub name: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("APP_NAME", "billing");
//! #     std::env::remove_var("APP_PORT");
//! let config = Config::from_env()?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.name, "billing");
//! #     Ok(())
//! # }
//! ```
//!
//! # Directives
//!
//! ## `#[env(var = "NAME")]`
//!
//! Environment variable the field is read from. Every scalar field needs one;
//! a scalar field without it fails with [`BindError::MissingDirective`].
//!
//! ## `#[env(required)]`
//!
//! Fail with [`BindError::RequiredValueMissing`] when the variable is empty or
//! unset. Checked before `default`, so a default never masks a missing
//! required variable. Also accepted as `required = true` or `required = "true"`;
//! any other string means not required.
//!
//! ## `#[env(default = "literal")]`
//!
//! Literal bound when the variable is empty or unset. It goes through the
//! same parsing and validation as an environment value. Without a default the
//! field keeps whatever value it already had, and no validation runs.
//!
//! ## Nested records
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Database {
//!     #[env(var = "DOC_DB_HOST")]
//!     pub host: String,
//!     #[env(var = "DOC_DB_PORT", default = "5432")]
//!     pub port: i64,
//! }
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     // No `var` directive: bound field by field
//!     pub db: Database,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let env = std::collections::HashMap::from([
//!     ("DOC_DB_HOST".to_string(), "localhost".to_string()),
//! ]);
//! let mut config = Config::default();
//! envbind::bind_with(&mut config, &env)?;
//! assert_eq!(config.db.host, "localhost");
//! assert_eq!(config.db.port, 5432);
//! #     Ok(())
//! # }
//! ```

mod env;
mod error;
mod kind;
mod record;
mod resolve;

pub use env::{Environment, ProcessEnv};
pub use envbind_derive::EnvBind;
pub use error::{BindError, ValidationError};
pub use kind::{Bindable, Kind, Slot};
pub use record::{bind, bind_with, EnvBind, FieldDescriptor};
pub use resolve::Directives;
