// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory message bundle for one locale.
//!
//! A [`Bundle`] is the resolved form of a locale file: four category maps
//! (info, error, help, usage) plus the locale code and backing path. It is
//! read-only after construction — reloads build a fresh bundle and swap it
//! in, they never mutate an existing one.
//!
//! Compiled-in defaults live here as static key/template tables, the same
//! shape the document uses on disk. Construction merges them under any
//! entries the file already provides, so a freshly-seeded default-locale
//! file and a user-edited one go through the same path.
//!
//! ## Adding a new default entry
//!
//! 1. Add `("someKey", "&7Template with {0}.")` to the matching table
//! 2. The on-disk key is derived automatically (`someKey` → `some-key`)

use crate::format::{colorize, substitute};
use crate::keys::hyphenate;
use crate::store::MessagesDocument;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// Default templates keyed by internal identifier. Identifiers are written
// in compounded-capitalization style and hyphenated at merge time.
const DEFAULT_INFO: &[(&str, &str)] = &[];

const DEFAULT_ERRORS: &[(&str, &str)] = &[(
    "noPermission",
    "&cYou have no permission for &6{0} &ccommand.",
)];

/// Resolved message categories for a single locale.
#[derive(Debug, Clone)]
pub struct Bundle {
    locale: String,
    path: PathBuf,
    info: BTreeMap<String, String>,
    error: BTreeMap<String, String>,
    help: BTreeMap<String, BTreeMap<String, String>>,
    usage: BTreeMap<String, BTreeMap<String, String>>,
}

impl Bundle {
    /// Build a bundle from a loaded document, filling in compiled-in
    /// defaults for entries the document does not carry.
    pub fn from_document(locale: &str, path: PathBuf, document: MessagesDocument) -> Self {
        let MessagesDocument {
            mut info,
            mut error,
            help,
            usage,
        } = document;

        for &(identifier, template) in DEFAULT_INFO {
            info.entry(hyphenate(identifier))
                .or_insert_with(|| template.to_string());
        }
        for &(identifier, template) in DEFAULT_ERRORS {
            error
                .entry(hyphenate(identifier))
                .or_insert_with(|| template.to_string());
        }

        Self {
            locale: locale.to_string(),
            path,
            info,
            error,
            help,
            usage,
        }
    }

    /// Build a bundle holding only the compiled-in defaults.
    pub fn from_defaults(locale: &str, path: PathBuf) -> Self {
        Self::from_document(locale, path, MessagesDocument::default())
    }

    /// Serialize the bundle back into its on-disk shape.
    pub fn to_document(&self) -> MessagesDocument {
        MessagesDocument {
            info: self.info.clone(),
            error: self.error.clone(),
            help: self.help.clone(),
            usage: self.usage.clone(),
        }
    }

    /// Locale code this bundle was resolved for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// File backing this bundle on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Info message for `key`, colorized.
    ///
    /// With arguments: the raw template is looked up, placeholders are
    /// substituted, then the whole result is colorized once. Returns
    /// `None` for an unknown key.
    pub fn info(&self, key: &str, args: &[&str]) -> Option<String> {
        flat_lookup(&self.info, key, args)
    }

    /// Info message for `key` without placeholder substitution, colorized
    /// on request.
    pub fn info_colored(&self, key: &str, colored: bool) -> Option<String> {
        flat_colored(&self.info, key, colored)
    }

    /// Error message for `key`, colorized. `None` for an unknown key.
    pub fn error(&self, key: &str, args: &[&str]) -> Option<String> {
        flat_lookup(&self.error, key, args)
    }

    /// Error message for `key` without placeholder substitution.
    pub fn error_colored(&self, key: &str, colored: bool) -> Option<String> {
        flat_colored(&self.error, key, colored)
    }

    /// Help message for a command's sub-command, colorized.
    ///
    /// `None` when either the command or the sub-command is absent.
    pub fn help(&self, command: &str, sub_command: &str, args: &[&str]) -> Option<String> {
        nested_lookup(&self.help, command, sub_command, args)
    }

    /// Help message without placeholder substitution.
    pub fn help_colored(&self, command: &str, sub_command: &str, colored: bool) -> Option<String> {
        nested_colored(&self.help, command, sub_command, colored)
    }

    /// Usage message for a command's sub-command, colorized.
    pub fn usage(&self, command: &str, sub_command: &str, args: &[&str]) -> Option<String> {
        nested_lookup(&self.usage, command, sub_command, args)
    }

    /// Usage message without placeholder substitution.
    pub fn usage_colored(&self, command: &str, sub_command: &str, colored: bool) -> Option<String> {
        nested_colored(&self.usage, command, sub_command, colored)
    }

    /// Every help message registered for `command`, in map iteration
    /// order (sorted by sub-command key).
    ///
    /// Returns `None` when the command itself is unknown; a known command
    /// with no sub-commands yields `Some` of an empty vector.
    pub fn all_help_for(&self, command: &str, colored: bool) -> Option<Vec<String>> {
        let sub_commands = self.help.get(command)?;
        let messages = sub_commands
            .values()
            .map(|template| {
                if colored {
                    colorize(template)
                } else {
                    template.clone()
                }
            })
            .collect();
        Some(messages)
    }
}

// Empty args delegate to the colored form; otherwise substitution runs on
// the raw template and colorization follows as a single pass over the
// substituted result. Argument text containing `&` is therefore colorized
// along with the template.
fn flat_lookup(map: &BTreeMap<String, String>, key: &str, args: &[&str]) -> Option<String> {
    if args.is_empty() {
        flat_colored(map, key, true)
    } else {
        flat_colored(map, key, false).map(|raw| colorize(&substitute(&raw, args)))
    }
}

fn flat_colored(map: &BTreeMap<String, String>, key: &str, colored: bool) -> Option<String> {
    let template = map.get(key)?;
    Some(if colored {
        colorize(template)
    } else {
        template.clone()
    })
}

fn nested_lookup(
    map: &BTreeMap<String, BTreeMap<String, String>>,
    command: &str,
    sub_command: &str,
    args: &[&str],
) -> Option<String> {
    if args.is_empty() {
        nested_colored(map, command, sub_command, true)
    } else {
        nested_colored(map, command, sub_command, false)
            .map(|raw| colorize(&substitute(&raw, args)))
    }
}

fn nested_colored(
    map: &BTreeMap<String, BTreeMap<String, String>>,
    command: &str,
    sub_command: &str,
    colored: bool,
) -> Option<String> {
    let template = map.get(command)?.get(sub_command)?;
    Some(if colored {
        colorize(template)
    } else {
        template.clone()
    })
}
