//! Sanitizing stored text before it reaches the terminal
//!
//! Entry text comes from a file on disk that anyone with access to the data
//! directory can edit. Escape sequences in it would be interpreted by the
//! terminal when printed by the CLI, and they confuse ratatui's width
//! calculations inside the TUI, so both paths pass text through
//! [`sanitize_for_display`] first.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes ANSI escape sequences and control characters from `text`
///
/// Handles CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and two-character escapes. Tabs and newlines are kept; carriage returns
/// are dropped so `\r\n` line endings render as plain newlines.
///
/// # Examples
///
/// ```
/// use prompt_journal::utils::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mRed\x1b[0m day"), "Red day");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                Some('[') => {
                    // Parameters and intermediates end at the first byte in '@'..='~'
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape (or a lone trailing ESC)
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\n' && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
