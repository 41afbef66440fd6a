//! Output normalization and completeness checks.

use crate::error::CodegenError;
use crate::helpers::EOF_MARKER;

/// Normalizes whitespace in rendered output.
///
/// Strips trailing whitespace, drops leading blank lines, collapses runs of
/// blank lines into one, and ends the text with exactly one newline.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            pending_blank = !output.is_empty();
            continue;
        }
        if pending_blank {
            output.push('\n');
            pending_blank = false;
        }
        output.push_str(line);
        output.push('\n');
    }

    output
}

/// Checks that an artifact was rendered completely.
///
/// The last line must be the end-of-file marker and every
/// `namespace x {` must be closed by a matching `}  // namespace x`, with
/// closes in reverse order of opens.
///
/// # Errors
/// Returns `CodegenError::Incomplete` describing the first violation.
pub fn check_artifact(file: &str, text: &str) -> Result<(), CodegenError> {
    let incomplete = |message: String| CodegenError::Incomplete {
        file: file.to_string(),
        message,
    };

    if text.lines().rev().find(|l| !l.trim().is_empty()) != Some(EOF_MARKER) {
        return Err(incomplete("missing end-of-file marker".to_string()));
    }

    let mut open: Vec<&str> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(name) = line
            .strip_prefix("namespace ")
            .and_then(|rest| rest.strip_suffix(" {"))
        {
            open.push(name);
        } else if let Some(name) = line.strip_prefix("}  // namespace ") {
            match open.pop() {
                Some(expected) if expected == name => {}
                Some(expected) => {
                    return Err(incomplete(format!(
                        "line {}: closes namespace '{name}' while '{expected}' is innermost",
                        idx + 1
                    )));
                }
                None => {
                    return Err(incomplete(format!(
                        "line {}: closes namespace '{name}' that was never opened",
                        idx + 1
                    )));
                }
            }
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(incomplete(format!("namespace '{unclosed}' is never closed")));
    }
    Ok(())
}
