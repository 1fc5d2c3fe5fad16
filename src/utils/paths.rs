use std::borrow::Cow;
use std::env;
use std::path::Path;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters that are unsafe or awkward in file names on at least one platform
const KEY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'*')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'/')
    .add(b'\\')
    .add(b'|')
    .add(b':')
    .add(b'@');

/// Encodes a storage key into a string usable as a file name
///
/// # Examples
///
/// ```
/// use prompt_journal::utils::encode_key;
///
/// assert_eq!(encode_key("@journal_app:journals"), "%40journal_app%3Ajournals");
/// ```
pub fn encode_key(key: &str) -> String {
    let encoded = utf8_percent_encode(key, KEY_ENCODE_SET).to_string();
    // "." and ".." would resolve to directories
    match encoded.as_str() {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => encoded,
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&Path>) -> String {
    let home_from_env = dirs::home_dir().or_else(|| env::var_os("HOME").map(Into::into));
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
