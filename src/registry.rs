// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment Registry
//!
//! This module provides the `EnvironmentRegistry`, which maps environment names to the
//! values of the two process variables `APP_ENV` and `NODE_ENV`, detects the current
//! environment from them and keeps them synchronized.
//!
//! ## Lifecycle
//!
//! A registry starts with the built-in table and no current environment:
//!
//! 1. **Registration**: callers may add or overwrite entries with `insert()` or the
//!    chaining form `with_environment()`.
//!
//! 2. **Resolution**: `resolve_current()` reads `APP_ENV`, falling back to `NODE_ENV`
//!    when it is empty, and records the name as the current environment.
//!
//! 3. **Consolidation**: `consolidate()` rewrites both variables from the current
//!    environment's record, so a process started with only `NODE_ENV=prod` ends up with
//!    `APP_ENV=prod` and `NODE_ENV=production`.
//!
//! Nothing happens implicitly: reading the current environment before resolving it fails
//! with [`EnvironmentError::InvalidArgument`].
//!
//! ## Process Environment
//!
//! Consolidation writes to the process environment, which is shared by every thread and
//! every registry. It is meant to run once during startup, before any other thread reads
//! or writes environment variables.

use crate::{
    env_keys::{APP_ENV_KEY, NODE_ENV_KEY},
    environment::{EnvironmentRecord, builtin_table, is_builtin},
    errors::{EnvironmentError, Result},
};
use std::{collections::HashMap, env};
use tracing::{debug, error, warn};

/// Registry of named environments and the one currently in use.
///
/// # Example
///
/// ```rust
/// use env_registry::{EnvironmentRecord, EnvironmentRegistry};
///
/// let registry = EnvironmentRegistry::new()
///     .with_environment("ci", EnvironmentRecord::new("ci", "test"));
///
/// assert!(registry.has("ci"));
/// assert!(registry.has("prod"));
/// assert_eq!(registry.get("prod").unwrap().secondary_var(), "production");
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentRegistry {
    envs: HashMap<String, EnvironmentRecord>,
    current: Option<String>,
}

impl Default for EnvironmentRegistry {
    fn default() -> Self {
        EnvironmentRegistry {
            envs: builtin_table(),
            current: None,
        }
    }
}

impl EnvironmentRegistry {
    /// Creates a registry holding the built-in environments (`dev`, `local`, `prod`,
    /// `stage`, `test`, `testProd` and `testDev`) with no current environment.
    pub fn new() -> EnvironmentRegistry {
        EnvironmentRegistry::default()
    }

    /// Adds an environment, returning the registry for method chaining.
    ///
    /// An existing entry with the same name is replaced. See [`insert`](Self::insert).
    pub fn with_environment(mut self, name: impl Into<String>, record: EnvironmentRecord) -> Self {
        self.insert(name, record);
        self
    }

    /// Adds or replaces an environment.
    ///
    /// # Returns
    ///
    /// The record previously stored under `name`, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        record: EnvironmentRecord,
    ) -> Option<EnvironmentRecord> {
        let name = name.into();

        if is_builtin(&name) {
            warn!(env = name, "overwriting built-in environment");
        } else {
            debug!(env = name, "registering environment");
        }

        self.envs.insert(name, record)
    }

    /// Returns `true` if an environment named `name` is defined.
    pub fn has(&self, name: &str) -> bool {
        self.envs.contains_key(name)
    }

    /// Looks up an environment by name.
    ///
    /// # Errors
    ///
    /// - [`EnvironmentError::InvalidArgument`] if `name` is empty
    /// - [`EnvironmentError::NotFound`] if no environment is named `name`
    pub fn get(&self, name: &str) -> Result<&EnvironmentRecord> {
        if name.is_empty() {
            return Err(EnvironmentError::InvalidArgument);
        }

        self.envs
            .get(name)
            .ok_or_else(|| EnvironmentError::NotFound(name.to_owned()))
    }

    /// Resolves the current environment from the process environment.
    ///
    /// The name is taken from `APP_ENV`, or from `NODE_ENV` when `APP_ENV` is unset or
    /// empty. The name is stored as the current environment before it is checked, so
    /// after a failure [`current`](Self::current) still reports the rejected name.
    ///
    /// # Returns
    ///
    /// The registry itself, for chaining into [`consolidate`](Self::consolidate).
    ///
    /// # Errors
    ///
    /// [`EnvironmentError::NotFound`] if both variables are empty or the name they carry
    /// is not defined.
    pub fn resolve_current(&mut self) -> Result<&mut Self> {
        let app_env = read_var(APP_ENV_KEY);
        let name = if app_env.is_empty() {
            read_var(NODE_ENV_KEY)
        } else {
            app_env
        };

        let name = self.current.insert(name);
        if name.is_empty() || !self.envs.contains_key(name.as_str()) {
            error!(env = name.as_str(), "environment not found");
            return Err(EnvironmentError::NotFound(name.clone()));
        }

        debug!(env = name.as_str(), "current environment resolved");
        Ok(self)
    }

    /// Writes `APP_ENV` and `NODE_ENV` from the current environment's record.
    ///
    /// If no environment was resolved yet, [`resolve_current`](Self::resolve_current)
    /// runs first. Whatever the variables held before, afterwards both match the record.
    ///
    /// # Errors
    ///
    /// [`EnvironmentError::NotFound`] if resolution fails, or if the current name was
    /// left behind by an earlier failed resolution.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use env_registry::EnvironmentRegistry;
    ///
    /// // started with NODE_ENV=stage
    /// let mut registry = EnvironmentRegistry::new();
    /// registry.consolidate()?;
    ///
    /// assert_eq!(std::env::var("APP_ENV").unwrap(), "stage");
    /// assert_eq!(std::env::var("NODE_ENV").unwrap(), "production");
    /// # Ok::<(), env_registry::errors::EnvironmentError>(())
    /// ```
    pub fn consolidate(&mut self) -> Result<&mut Self> {
        if self.current_name().is_none() {
            self.resolve_current()?;
        }

        let record = self.get_current()?;
        write_var(APP_ENV_KEY, record.primary_var());
        write_var(NODE_ENV_KEY, record.secondary_var());

        debug!(
            app_env = record.primary_var(),
            node_env = record.secondary_var(),
            "environment consolidated"
        );
        Ok(self)
    }

    /// Returns `true` if the current environment is `name`.
    ///
    /// Never triggers resolution; an unresolved registry is not in any environment.
    pub fn is(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }

    /// Name of the current environment, as last set by resolution.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record of the current environment.
    ///
    /// # Errors
    ///
    /// - [`EnvironmentError::InvalidArgument`] if no environment was resolved
    /// - [`EnvironmentError::NotFound`] if the current name is not defined
    pub fn get_current(&self) -> Result<&EnvironmentRecord> {
        self.get(self.current.as_deref().unwrap_or_default())
    }

    /// `APP_ENV` value of the current environment.
    ///
    /// # Errors
    ///
    /// Same as [`get_current`](Self::get_current).
    pub fn primary_var(&self) -> Result<&str> {
        self.get_current().map(EnvironmentRecord::primary_var)
    }

    /// Always fails: `APP_ENV` is derived from the current environment.
    pub fn set_primary_var(&mut self, _value: impl Into<String>) -> Result<()> {
        Err(EnvironmentError::ReadOnly(APP_ENV_KEY))
    }

    /// `NODE_ENV` value of the current environment.
    ///
    /// # Errors
    ///
    /// Same as [`get_current`](Self::get_current).
    pub fn secondary_var(&self) -> Result<&str> {
        self.get_current().map(EnvironmentRecord::secondary_var)
    }

    /// Always fails: `NODE_ENV` is derived from the current environment.
    pub fn set_secondary_var(&mut self, _value: impl Into<String>) -> Result<()> {
        Err(EnvironmentError::ReadOnly(NODE_ENV_KEY))
    }

    /// Iterates over every defined environment, in no particular order.
    pub fn environments(&self) -> impl Iterator<Item = (&str, &EnvironmentRecord)> {
        self.envs.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of defined environments.
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
}

// Helper methods
impl EnvironmentRegistry {
    /// Current name, with an empty name treated as unset.
    fn current_name(&self) -> Option<&str> {
        self.current.as_deref().filter(|name| !name.is_empty())
    }
}

/// Reads a process variable, treating unset and non-unicode values as empty.
fn read_var(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

fn write_var(key: &str, value: &str) {
    // SAFETY: consolidation runs during single-threaded startup, before any other
    // thread reads or writes the process environment.
    unsafe { env::set_var(key, value) }
}
