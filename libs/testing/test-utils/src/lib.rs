//! Shared test utilities for the product crates
//!
//! - `TestDatabase`: PostgreSQL container with the product schema applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let user_id = builder.user_id();
//!     let title = builder.title("desk", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::{TestDatabase, split_sql_statements};

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same ids, titles and prices, so a failing
/// test can be replayed exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// assert!(builder.user_id() > 0);
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Owner id, always in `1..=i32::MAX`
    pub fn user_id(&self) -> i32 {
        (self.seed % i32::MAX as u64) as i32 + 1
    }

    /// Price in `100..100_000`
    pub fn price(&self) -> i32 {
        (self.seed % 99_900) as i32 + 100
    }

    /// Unique product title, e.g. `"test-desk-12345-main"`
    pub fn title(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that a result failed and return the error
    pub fn assert_err<T: Debug, E>(result: Result<T, E>, context: &str) -> E {
        match result {
            Ok(value) => panic!("{}: expected Err, got Ok({:?})", context, value),
            Err(err) => err,
        }
    }

    /// Assert that ids are strictly ascending
    pub fn assert_ascending(ids: &[i32], context: &str) {
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not strictly ascending: {:?}",
                context,
                ids
            );
        }
    }
}
