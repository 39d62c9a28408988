//! Command-name normalization.
//!
//! Raw names given on the command line may contain dashes and underscores
//! (`server-admin`, `get_user`). Generated source needs a single identifier
//! free of separator characters, so separators are removed and the character
//! after each one is upper-cased (`serverAdmin`, `getUser`).

/// Normalize a raw command name into an identifier.
///
/// Separator runs collapse to a single case shift, a trailing separator is
/// dropped, and input without separators is returned unchanged. Scoped to
/// ASCII names: non-ASCII characters pass through untouched and the case
/// shift is `to_ascii_uppercase`, so the function never panics and never
/// produces invalid UTF-8, but only ASCII letters actually shift case.
pub fn normalize(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let mut i = 0;

    // The accumulator is seeded on demand, when the first dash or
    // underscore occurs. Until then the output is a prefix of the input.
    let mut output: Option<String> = None;

    while i < len {
        if chars[i] == '-' || chars[i] == '_' {
            let acc = output.get_or_insert_with(|| chars[..i].iter().collect());

            // A separator in final position contributes nothing.
            if i == len - 1 {
                break;
            }

            // Runs of separators collapse; the last one performs the shift.
            if chars[i + 1] == '-' || chars[i + 1] == '_' {
                i += 1;
                continue;
            }

            acc.push(chars[i + 1].to_ascii_uppercase());
            i += 2;
        } else {
            if let Some(acc) = output.as_mut() {
                acc.push(chars[i]);
            }
            i += 1;
        }
    }

    output.unwrap_or_else(|| source.to_string())
}
