// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plugin-Messages — per-locale message bundles for command layers.
//!
//! This crate resolves human-facing command messages (info, error, help,
//! usage) from per-locale YAML files and formats them for display.
//!
//! ENGINE PILLARS:
//! 1. **Loader**: the locale-resolution protocol — fall back to `"en"`
//!    when a requested locale is missing or broken, delete corrupt files,
//!    and create the default-locale file from compiled-in defaults on
//!    first run (the default locale is always satisfiable).
//! 2. **Resolver**: keyed lookups over the active bundle, with positional
//!    `{n}` placeholder substitution and `&` → `§` color translation.
//!    Absent keys resolve to `None`, never to an error.
//! 3. **Store**: the serde/YAML document boundary, including the
//!    hyphenated-lowercase key convention for persisted entries.

pub mod bundle;
pub mod diagnostics;
pub mod format;
pub mod keys;
pub mod loader;
pub mod resolver;
pub mod store;
