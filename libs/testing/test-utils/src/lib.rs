//! Shared test infrastructure for the catalog crates.
//!
//! - [`TestDatabase`]: disposable PostgreSQL container with all migrations applied
//! - [`TestDataBuilder`]: deterministic, per-test unique names
//! - [`assertions`]: small assertion helpers
//!
//! Container-backed tests need a Docker daemon; mark them
//! `#[ignore = "requires Docker"]` and run with `cargo test -- --ignored`.
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("create_category");
//! let name = builder.name("category", "main");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Deterministic test data derived from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name, so each test gets its own stable values.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<prefix>-<seed>-<suffix>`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A price in `0.00..100.00` that stays the same for this seed and `salt`.
    pub fn price(&self, salt: u64) -> f64 {
        ((self.seed.wrapping_add(salt)) % 10_000) as f64 / 100.0
    }
}

pub mod assertions {
    /// Unwrap `value`, failing the test with `context` when it is `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two id lists hold the same ids, ignoring order.
    pub fn assert_same_ids(mut actual: Vec<i32>, mut expected: Vec<i32>, context: &str) {
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(actual, expected, "{}: id sets differ", context);
    }
}
