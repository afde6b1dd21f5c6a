//! Environment capability: the single source of non-determinism.
//!
//! Everything the resolution engine needs from the outside world (clock,
//! acting user, unique identifiers) comes through the [`Environment`] trait.
//! Swapping [`HostEnvironment`] for a [`FixedEnvironment`] makes an entire
//! expansion pass reproducible byte-for-byte.

use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

/// Capability interface over clock, user identity, and identifier generation.
///
/// Implementations hold no state the core depends on: [`HostEnvironment`]
/// queries the host on every call, [`FixedEnvironment`] returns injected
/// constants. Callers must not assume `new_identifier` is fresh when the
/// environment is a test double.
pub trait Environment {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;

    /// A unique identifier. The live implementation never repeats a value;
    /// the fixed double returns its configured constant on every call.
    fn new_identifier(&self) -> Uuid;

    /// Short (login-style) name of the acting user.
    fn user_name(&self) -> String;

    /// Full display name of the acting user.
    fn full_user_name(&self) -> String;
}

/// Live environment backed by the host system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostEnvironment;

impl HostEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for HostEnvironment {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn new_identifier(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn user_name(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "user".to_string())
    }

    fn full_user_name(&self) -> String {
        // The process environment rarely carries a display name; fall back
        // to the short name rather than invent one.
        self.user_name()
    }
}

/// Deterministic test double with injected values.
///
/// `new_identifier` returns the same configured value on every call. That is
/// deliberate: the double trades freshness for reproducibility, and tests
/// that need distinct identifiers per key must use the live environment.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub now: DateTime<Local>,
    pub identifier: Uuid,
    pub user_name: String,
    pub full_user_name: String,
}

impl FixedEnvironment {
    /// A fixed environment with placeholder identity and the given timestamp.
    #[must_use]
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now,
            identifier: Uuid::nil(),
            user_name: "tester".to_string(),
            full_user_name: "Test User".to_string(),
        }
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        let epoch = Local
            .with_ymd_and_hms(2024, 12, 25, 12, 0, 0)
            .single()
            .unwrap_or_else(Local::now);
        Self::at(epoch)
    }
}

impl Environment for FixedEnvironment {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    fn new_identifier(&self) -> Uuid {
        self.identifier
    }

    fn user_name(&self) -> String {
        self.user_name.clone()
    }

    fn full_user_name(&self) -> String {
        self.full_user_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_identifiers_are_fresh() {
        let env = HostEnvironment::new();
        let a = env.new_identifier();
        let b = env.new_identifier();
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_identifier_repeats() {
        let env = FixedEnvironment::default();
        assert_eq!(env.new_identifier(), env.new_identifier());
    }

    #[test]
    fn fixed_now_is_stable() {
        let env = FixedEnvironment::default();
        assert_eq!(env.now(), env.now());
    }
}
