//! Environment collaborator

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// Key/value lookup the binding engine queries by exact, case-sensitive name.
///
/// Implementations may return `Some("")`; the engine treats an empty value
/// exactly like an absent one.
pub trait Environment {
    /// Value of the variable `name`, or `None` if it is unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("ENVBIND_TEST_LOOKUP", "value");
        assert_eq!(
            ProcessEnv.lookup("ENVBIND_TEST_LOOKUP"),
            Some("value".to_string())
        );
        env::remove_var("ENVBIND_TEST_LOOKUP");
        assert_eq!(ProcessEnv.lookup("ENVBIND_TEST_LOOKUP"), None);
    }

    #[test]
    fn test_map_lookup_is_case_sensitive() {
        let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
        assert_eq!(env.lookup("PORT"), Some("8080".to_string()));
        assert_eq!(env.lookup("port"), None);
    }
}
