// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bridge between internal field identifiers and the on-disk key convention.
//!
//! Compiled-in default entries are named in compounded-capitalization style
//! (`noPermission`); the persisted document uses hyphenated lowercase
//! (`no-permission`). This transform applies only at the document-store
//! boundary — in-memory lookups always use the already-hyphenated keys.

/// Convert a compounded-capitalization identifier to hyphenated lowercase.
///
/// Every originally-uppercase character is replaced by `-` followed by its
/// lowercase form. Characters that are neither lowercase nor uppercase
/// letters are dropped.
///
/// # Examples
///
/// ```
/// use plugin_messages::keys::hyphenate;
/// assert_eq!(hyphenate("noPermission"), "no-permission");
/// ```
pub fn hyphenate(identifier: &str) -> String {
    let mut key = String::with_capacity(identifier.len() + 2);
    for ch in identifier.chars() {
        if ch.is_lowercase() {
            key.push(ch);
        } else if ch.is_uppercase() {
            key.push('-');
            key.extend(ch.to_lowercase());
        }
    }
    key
}
