// SPDX-License-Identifier: PMPL-1.0-or-later

//! Formatting primitives shared by every lookup operation.
//!
//! Two pure functions: positional placeholder substitution and color-code
//! translation. Substitution is best-effort — placeholders without a
//! matching argument stay literal, extra arguments are ignored. Lookup
//! code always substitutes on the raw template first and colorizes the
//! whole result afterwards, so a template's own `&` markers and any `&`
//! inside argument text are translated in the same single pass.

/// The host platform's in-band color-escape marker (U+00A7, section sign).
pub const COLOR_CHAR: char = '\u{00a7}';

/// Replace `{0}`, `{1}`, … `{n}` tokens with the matching positional
/// argument.
///
/// With zero arguments the template is returned unchanged. Tokens with an
/// index past the last argument are left literal.
///
/// # Examples
///
/// ```
/// use plugin_messages::format::substitute;
/// assert_eq!(
///     substitute("Hello, {0}! I'm {1} c:", &["Notch", "NyanGuyMF"]),
///     "Hello, Notch! I'm NyanGuyMF c:"
/// );
/// ```
pub fn substitute(template: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}

/// Translate user-friendly color markers to the platform escape character.
///
/// Every ASCII `&` becomes `§` (U+00A7). No escaping mechanism exists; a
/// literal ampersand cannot survive colorization.
pub fn colorize(text: &str) -> String {
    text.replace('&', "\u{00a7}")
}
