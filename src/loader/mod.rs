// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution: fallback, self-healing, and corruption cleanup.
//!
//! [`resolve`] turns a requested locale into a usable [`Bundle`] no matter
//! what it finds on disk. The protocol runs as an explicit two-phase state
//! machine rather than recursion:
//!
//! 1. **Requested phase** — try the caller's locale. A missing file is
//!    reported and falls through; a malformed file is reported, deleted
//!    (so it cannot mask future repair attempts), and falls through.
//! 2. **Default phase** — the `"en"` file gets the same treatment, except
//!    that "missing" is not a failure: the file is (re)created from the
//!    compiled-in defaults. This is the only termination point that does
//!    not depend on an existing file, which bounds the whole protocol at
//!    two phases.
//!
//! Successful loads are persisted straight back, normalizing formatting
//! and filling in any defaults the file lacked. Callers must expect a
//! single `resolve` call to create, overwrite, or delete files.
//!
//! The only error that escapes is a write failure on the default-locale
//! path: if even `"en"` cannot be persisted there is no valid state left
//! to fall back to.

use crate::bundle::Bundle;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::store::{self, LoadError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The canonical fallback locale, guaranteed always resolvable.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Requested,
    Default,
}

/// Resolve `requested` to a bundle, falling back to [`DEFAULT_LOCALE`].
///
/// Recoverable conditions (missing file, malformed file) are reported to
/// `sink` and absorbed. The returned bundle's locale may therefore differ
/// from `requested`. Fails only when the default-locale bundle cannot be
/// persisted.
pub fn resolve(
    base_dir: &Path,
    requested: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Bundle> {
    let mut phase = Phase::Requested;
    loop {
        // The default phase always uses the lowercase canonical code; a
        // request that already names the default locale keeps its casing
        // in the file name but gains the self-healing behavior.
        let (locale, healing) = match phase {
            Phase::Requested => (
                requested,
                requested.eq_ignore_ascii_case(DEFAULT_LOCALE),
            ),
            Phase::Default => (DEFAULT_LOCALE, true),
        };
        let path = store::locale_path(base_dir, locale);

        match store::load(&path) {
            Ok(document) => {
                let bundle = Bundle::from_document(locale, path.clone(), document);
                match store::save(&path, &bundle.to_document()) {
                    Ok(()) => return Ok(bundle),
                    Err(cause) if healing => {
                        return Err(cause)
                            .context("default locale bundle could not be persisted");
                    }
                    Err(cause) => {
                        sink.report(&Diagnostic::MalformedLocaleFile {
                            locale: locale.to_string(),
                            cause: format!("{cause:#}"),
                        });
                        discard(&path);
                        phase = Phase::Default;
                    }
                }
            }
            Err(LoadError::NotFound) if healing => return seed_defaults(locale, path),
            Err(LoadError::NotFound) => {
                sink.report(&Diagnostic::MissingLocaleFile {
                    locale: locale.to_string(),
                });
                phase = Phase::Default;
            }
            Err(LoadError::Malformed(cause)) => {
                sink.report(&Diagnostic::MalformedLocaleFile {
                    locale: locale.to_string(),
                    cause: format!("{cause:#}"),
                });
                discard(&path);
                if healing {
                    return seed_defaults(locale, path);
                }
                phase = Phase::Default;
            }
        }
    }
}

/// Create the default-locale file from compiled-in defaults.
fn seed_defaults(locale: &str, path: PathBuf) -> Result<Bundle> {
    let bundle = Bundle::from_defaults(locale, path);
    store::save(bundle.path(), &bundle.to_document())
        .context("default locale bundle could not be created")?;
    Ok(bundle)
}

// Deletion is best-effort: the file is about to be overwritten or ignored
// either way, and the original manager discarded the result too.
fn discard(path: &Path) {
    let _ = store::delete(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_run_creates_the_default_file() {
        let dir = TempDir::new().expect("tempdir should create");
        let sink = MemorySink::new();

        let bundle = resolve(dir.path(), "en", &sink).expect("resolve should succeed");
        assert_eq!(bundle.locale(), "en");
        assert!(dir.path().join("messages_en.yml").is_file());
        assert!(sink.recorded().is_empty());
    }

    #[test]
    fn default_locale_casing_is_preserved_in_the_file_name() {
        let dir = TempDir::new().expect("tempdir should create");
        let sink = MemorySink::new();

        let bundle = resolve(dir.path(), "EN", &sink).expect("resolve should succeed");
        assert_eq!(bundle.locale(), "EN");
        assert!(dir.path().join("messages_EN.yml").is_file());
    }

    #[test]
    fn missing_locale_reports_and_falls_back() {
        let dir = TempDir::new().expect("tempdir should create");
        let sink = MemorySink::new();

        let bundle = resolve(dir.path(), "ru", &sink).expect("resolve should succeed");
        assert_eq!(bundle.locale(), "en");
        assert!(!dir.path().join("messages_ru.yml").exists());
        assert!(matches!(
            sink.recorded().as_slice(),
            [Diagnostic::MissingLocaleFile { locale }] if locale == "ru"
        ));
    }

    #[test]
    fn corrupt_default_file_is_rebuilt_from_defaults() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("messages_en.yml");
        fs::write(&path, "error: [broken\n").expect("file should write");
        let sink = MemorySink::new();

        let bundle = resolve(dir.path(), "en", &sink).expect("resolve should succeed");
        assert!(bundle.error_colored("no-permission", false).is_some());
        assert!(matches!(
            sink.recorded().as_slice(),
            [Diagnostic::MalformedLocaleFile { locale, .. }] if locale == "en"
        ));

        // The rebuilt file must parse on the next pass.
        let again = resolve(dir.path(), "en", &MemorySink::new());
        assert!(again.is_ok());
    }

    #[test]
    fn unwritable_base_dir_is_fatal() {
        let dir = TempDir::new().expect("tempdir should create");
        let missing = dir.path().join("does-not-exist");
        let sink = MemorySink::new();

        let result = resolve(&missing, "en", &sink);
        assert!(result.is_err(), "seeding under a missing dir should fail");
    }
}
