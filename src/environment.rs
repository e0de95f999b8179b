// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment Records
//!
//! An [`EnvironmentRecord`] is the pair of values an environment assigns to the two
//! synchronized process variables: `APP_ENV` carries the logical environment name and
//! `NODE_ENV` carries the coarser runtime mode (development, production or test).

use crate::env_keys::{
    DEV, DEVELOPMENT_MODE, LOCAL, PROD, PRODUCTION_MODE, STAGE, TEST, TEST_DEV, TEST_MODE,
    TEST_PROD,
};
use std::collections::HashMap;

/// The values written to `APP_ENV` and `NODE_ENV` for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRecord {
    primary_var: String,
    secondary_var: String,
}

impl EnvironmentRecord {
    /// Creates a record from its `APP_ENV` and `NODE_ENV` values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use env_registry::EnvironmentRecord;
    ///
    /// let ci = EnvironmentRecord::new("ci", "test");
    /// assert_eq!(ci.primary_var(), "ci");
    /// assert_eq!(ci.secondary_var(), "test");
    /// ```
    pub fn new(primary_var: impl Into<String>, secondary_var: impl Into<String>) -> Self {
        EnvironmentRecord {
            primary_var: primary_var.into(),
            secondary_var: secondary_var.into(),
        }
    }

    /// Value for `APP_ENV`.
    pub fn primary_var(&self) -> &str {
        &self.primary_var
    }

    /// Value for `NODE_ENV`.
    pub fn secondary_var(&self) -> &str {
        &self.secondary_var
    }
}

/// Builds the table every registry starts with.
pub(crate) fn builtin_table() -> HashMap<String, EnvironmentRecord> {
    [
        (DEV, DEVELOPMENT_MODE),
        (LOCAL, DEVELOPMENT_MODE),
        (PROD, PRODUCTION_MODE),
        (STAGE, PRODUCTION_MODE),
        (TEST, TEST_MODE),
        (TEST_PROD, PRODUCTION_MODE),
        (TEST_DEV, DEVELOPMENT_MODE),
    ]
    .into_iter()
    .map(|(name, mode)| (name.to_owned(), EnvironmentRecord::new(name, mode)))
    .collect()
}

/// Whether `name` is one of the environments shipped with the registry.
pub(crate) fn is_builtin(name: &str) -> bool {
    matches!(
        name,
        DEV | LOCAL | PROD | STAGE | TEST | TEST_PROD | TEST_DEV
    )
}
