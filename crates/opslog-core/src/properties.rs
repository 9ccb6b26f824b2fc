//! Property resolver chain for process-level configuration values.
//!
//! A named setting is resolved by trying, in order: an explicitly passed
//! value, the volatile in-process override store, the process environment,
//! and finally a caller-supplied static default. Each source is tried with
//! every alias name supplied for the setting. This chain runs at application
//! identity construction only; it is not on the per-call hot path.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

/// A resolver looks a setting up under a list of alias names and returns the
/// first value it finds.
pub trait PropertyResolver: Send + Sync {
    fn resolve(&self, names: &[&str]) -> Option<String>;
}

static OVERRIDES: Lazy<RwLock<HashMap<String, String>>> = Lazy::new(RwLock::default);

/// Set a volatile process-level property override.
///
/// Overrides shadow environment variables and are matched case-insensitively.
/// Intended for bootstrap code and tests.
pub fn set_property(name: impl Into<String>, value: impl Into<String>) {
    OVERRIDES
        .write()
        .expect("property override store poisoned")
        .insert(name.into(), value.into());
}

/// Remove a previously set property override.
pub fn remove_property(name: &str) {
    OVERRIDES
        .write()
        .expect("property override store poisoned")
        .remove(name);
}

/// Resolves against the volatile in-process override store.
///
/// Lookup is case-insensitive on both the stored key and the alias names.
#[derive(Debug, Default)]
pub struct OverrideResolver;

impl PropertyResolver for OverrideResolver {
    fn resolve(&self, names: &[&str]) -> Option<String> {
        let overrides = OVERRIDES.read().expect("property override store poisoned");
        for (key, value) in overrides.iter() {
            if names.iter().any(|name| name.eq_ignore_ascii_case(key)) {
                return Some(value.clone());
            }
        }
        None
    }
}

/// Resolves against process environment variables, exact-match per alias.
#[derive(Debug, Default)]
pub struct EnvResolver;

impl PropertyResolver for EnvResolver {
    fn resolve(&self, names: &[&str]) -> Option<String> {
        for name in names {
            if let Ok(value) = std::env::var(name) {
                return Some(value);
            }
        }
        None
    }
}

/// Walks a list of resolvers in order; the first hit wins.
pub struct CompositeResolver {
    resolvers: Vec<Box<dyn PropertyResolver>>,
}

impl CompositeResolver {
    pub fn new(resolvers: Vec<Box<dyn PropertyResolver>>) -> Self {
        Self { resolvers }
    }
}

impl PropertyResolver for CompositeResolver {
    fn resolve(&self, names: &[&str]) -> Option<String> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(names))
    }
}

// Override store first, then the environment.
static PROCESS_CHAIN: Lazy<CompositeResolver> = Lazy::new(|| {
    CompositeResolver::new(vec![
        Box::new(OverrideResolver),
        Box::new(EnvResolver),
    ])
});

/// Resolve a setting with full precedence: an explicitly passed value beats
/// the process chain, which beats the static default.
pub fn resolve_property(explicit: Option<&str>, aliases: &[&str], default: &str) -> String {
    if let Some(value) = explicit {
        return value.to_string();
    }
    PROCESS_CHAIN
        .resolve(aliases)
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_value_wins() {
        assert_eq!(
            resolve_property(Some("explicit"), &["OPSLOG_TEST_UNSET"], "fallback"),
            "explicit"
        );
    }

    #[test]
    fn test_static_default_when_nothing_matches() {
        assert_eq!(
            resolve_property(None, &["OPSLOG_TEST_NEVER_SET_A", "OPSLOG_TEST_NEVER_SET_B"], "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_override_store_is_case_insensitive() {
        set_property("OpslogTestCasing", "from-override");
        assert_eq!(
            OverrideResolver.resolve(&["OPSLOGTESTCASING"]),
            Some("from-override".to_string())
        );
        assert_eq!(
            resolve_property(None, &["opslogtestcasing"], "fallback"),
            "from-override"
        );
        remove_property("OpslogTestCasing");
    }

    #[test]
    fn test_env_resolution_is_exact_match() {
        std::env::set_var("OPSLOG_TEST_ENV_EXACT", "from-env");
        assert_eq!(
            EnvResolver.resolve(&["OPSLOG_TEST_ENV_EXACT"]),
            Some("from-env".to_string())
        );
        assert_eq!(EnvResolver.resolve(&["opslog_test_env_exact"]), None);
        std::env::remove_var("OPSLOG_TEST_ENV_EXACT");
    }

    #[test]
    fn test_override_beats_environment() {
        std::env::set_var("OPSLOG_TEST_PRECEDENCE", "from-env");
        set_property("OPSLOG_TEST_PRECEDENCE", "from-override");
        assert_eq!(
            resolve_property(None, &["OPSLOG_TEST_PRECEDENCE"], "fallback"),
            "from-override"
        );
        remove_property("OPSLOG_TEST_PRECEDENCE");
        assert_eq!(
            resolve_property(None, &["OPSLOG_TEST_PRECEDENCE"], "fallback"),
            "from-env"
        );
        std::env::remove_var("OPSLOG_TEST_PRECEDENCE");
    }

    #[test]
    fn test_first_alias_hit_wins() {
        set_property("OPSLOG_TEST_ALIAS_B", "b");
        assert_eq!(
            resolve_property(None, &["OPSLOG_TEST_ALIAS_A", "OPSLOG_TEST_ALIAS_B"], "fallback"),
            "b"
        );
        remove_property("OPSLOG_TEST_ALIAS_B");
    }
}
