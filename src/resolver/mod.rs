// SPDX-License-Identifier: PMPL-1.0-or-later

//! Process-wide message resolution handle.
//!
//! [`Messages`] owns the active [`Bundle`] behind a swappable pointer: the
//! bundle is resolved once during startup, lookups clone an `Arc` snapshot,
//! and a reload publishes a fully-built replacement bundle before swapping
//! the pointer — readers never observe a half-constructed bundle. No file
//! I/O happens inside a lookup; all of it is confined to [`crate::loader`].
//!
//! Every lookup returns `Option<String>`. A missing key, command, or
//! sub-command is absence, never an error — what to show the end user for
//! a missing message is the caller's decision.

use crate::bundle::Bundle;
use crate::diagnostics::DiagnosticSink;
use crate::loader;
use anyhow::Result;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Lookup surface over the active message bundle.
#[derive(Debug)]
pub struct Messages {
    active: RwLock<Arc<Bundle>>,
}

impl Messages {
    /// Wrap an already-resolved bundle.
    pub fn new(bundle: Bundle) -> Self {
        Self {
            active: RwLock::new(Arc::new(bundle)),
        }
    }

    /// Resolve `locale` under `base_dir` and wrap the result.
    ///
    /// Convenience over [`loader::resolve`]; fails only when the
    /// default-locale bundle cannot be persisted.
    pub fn resolve(base_dir: &Path, locale: &str, sink: &dyn DiagnosticSink) -> Result<Self> {
        Ok(Self::new(loader::resolve(base_dir, locale, sink)?))
    }

    /// Snapshot of the currently active bundle.
    pub fn bundle(&self) -> Arc<Bundle> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a replacement bundle. In-flight lookups keep reading the
    /// snapshot they already hold.
    pub fn reload(&self, bundle: Bundle) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(bundle);
    }

    /// Re-resolve `locale` from disk and swap the result in.
    pub fn reload_from(
        &self,
        base_dir: &Path,
        locale: &str,
        sink: &dyn DiagnosticSink,
    ) -> Result<()> {
        let bundle = loader::resolve(base_dir, locale, sink)?;
        self.reload(bundle);
        Ok(())
    }

    /// See [`Bundle::info`].
    pub fn info(&self, key: &str, args: &[&str]) -> Option<String> {
        self.bundle().info(key, args)
    }

    /// See [`Bundle::info_colored`].
    pub fn info_colored(&self, key: &str, colored: bool) -> Option<String> {
        self.bundle().info_colored(key, colored)
    }

    /// See [`Bundle::error`].
    pub fn error(&self, key: &str, args: &[&str]) -> Option<String> {
        self.bundle().error(key, args)
    }

    /// See [`Bundle::error_colored`].
    pub fn error_colored(&self, key: &str, colored: bool) -> Option<String> {
        self.bundle().error_colored(key, colored)
    }

    /// See [`Bundle::help`].
    pub fn help(&self, command: &str, sub_command: &str, args: &[&str]) -> Option<String> {
        self.bundle().help(command, sub_command, args)
    }

    /// See [`Bundle::help_colored`].
    pub fn help_colored(&self, command: &str, sub_command: &str, colored: bool) -> Option<String> {
        self.bundle().help_colored(command, sub_command, colored)
    }

    /// See [`Bundle::usage`].
    pub fn usage(&self, command: &str, sub_command: &str, args: &[&str]) -> Option<String> {
        self.bundle().usage(command, sub_command, args)
    }

    /// See [`Bundle::usage_colored`].
    pub fn usage_colored(&self, command: &str, sub_command: &str, colored: bool) -> Option<String> {
        self.bundle().usage_colored(command, sub_command, colored)
    }

    /// See [`Bundle::all_help_for`].
    pub fn all_help_for(&self, command: &str, colored: bool) -> Option<Vec<String>> {
        self.bundle().all_help_for(command, colored)
    }
}
