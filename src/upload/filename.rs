//! Upload filename handling.
//!
//! Mirrors what the processing endpoint accepts: a short list of video
//! extensions, and names reduced to a filesystem-safe ASCII form.

use deunicode::deunicode;

/// Extensions the processing endpoint accepts.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Name used when sanitization leaves nothing.
const FALLBACK_NAME: &str = "video";

/// Lowercased extension of `name`, if it has one.
///
/// A leading dot alone (".mp4") does not count as an extension.
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether `name` carries one of the `allowed` extensions (case-insensitive).
pub fn is_allowed<S: AsRef<str>>(name: &str, allowed: &[S]) -> bool {
    match extension(name) {
        Some(ext) => allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

/// Reduce an uploaded filename to a safe ASCII name.
///
/// 1. Unicode → ASCII transliteration
/// 2. Path separators and whitespace → `_`
/// 3. Anything outside `[A-Za-z0-9._-]` dropped
/// 4. Leading/trailing `.` and `_` trimmed (no hidden files, no `..`)
/// 5. Windows reserved names prefixed with `_`
/// 6. Empty results → "video"
pub fn secure_filename(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_underscore = false;

    for c in ascii.chars() {
        if c.is_whitespace() || c == '/' || c == '\\' {
            if !last_was_underscore {
                result.push('_');
                last_was_underscore = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
            result.push(c);
            last_was_underscore = c == '_';
        }
    }

    let trimmed = result.trim_matches(|c| c == '.' || c == '_');
    let named = prefix_reserved(trimmed);

    if named.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        named
    }
}

fn prefix_reserved(name: &str) -> String {
    let base = name.split('.').next().unwrap_or(name);
    if WINDOWS_RESERVED
        .iter()
        .any(|r| r.eq_ignore_ascii_case(base))
    {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
