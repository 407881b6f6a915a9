// SPDX-License-Identifier: PMPL-1.0-or-later

//! Advisory diagnostics emitted during locale resolution.
//!
//! The loader never fails because of a missing or broken locale file — it
//! falls back — but the host deserves to hear about it. Diagnostics flow
//! through the [`DiagnosticSink`] seam so embedders can route them into
//! whatever channel they own; [`StderrSink`] is the default terminal
//! implementation.

use colored::Colorize;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A recoverable condition observed while resolving a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested locale has no message file on disk.
    MissingLocaleFile { locale: String },
    /// The locale file exists but could not be loaded; the loader deletes
    /// it before falling back.
    MalformedLocaleFile { locale: String, cause: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingLocaleFile { locale } => {
                write!(f, "locale file not found for locale «{locale}»")
            }
            Diagnostic::MalformedLocaleFile { locale, cause } => {
                write!(f, "unable to load locale file for locale «{locale}»: {cause}")
            }
        }
    }
}

/// Receiver for resolution diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Prints tagged diagnostic lines to stderr.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("  [{}] {}", "WARN".yellow().bold(), diagnostic);
    }
}

/// Records diagnostics in memory. Used by tests and by hosts that batch
/// resolution output.
#[derive(Debug, Default)]
pub struct MemorySink {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_locale_message_names_the_locale() {
        let diagnostic = Diagnostic::MissingLocaleFile {
            locale: "ru".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "locale file not found for locale «ru»"
        );
    }

    #[test]
    fn malformed_message_carries_the_cause() {
        let diagnostic = Diagnostic::MalformedLocaleFile {
            locale: "de".to_string(),
            cause: "unexpected end of stream".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "unable to load locale file for locale «de»: unexpected end of stream"
        );
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.report(&Diagnostic::MissingLocaleFile {
            locale: "fr".to_string(),
        });
        sink.report(&Diagnostic::MissingLocaleFile {
            locale: "ru".to_string(),
        });

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert!(matches!(&recorded[0], Diagnostic::MissingLocaleFile { locale } if locale == "fr"));
    }
}
