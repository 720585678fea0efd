//! Centralized input limits and helper functions.

use std::path::Path;

/// Maximum number of cost cells a traced comparison may allocate.
///
/// A cell is 16 bytes, so this bounds trace mode at roughly 320 MB.
/// Distance-only comparisons keep three rows and are not limited.
pub const MAX_TRACE_CELLS: usize = 20_000_000;

/// Maximum size of a text file accepted as comparison input
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} is too large: {size} bytes exceeds maximum of {MAX_INPUT_BYTES}")]
    TooLarge { path: String, size: u64 },
}

/// Check whether a traced comparison of these lengths fits the cell budget.
///
/// Returns an error message if the full table would exceed [`MAX_TRACE_CELLS`],
/// None if safe to build.
///
/// # Example
/// ```
/// use edit_solver::utils::validation::check_trace_size;
///
/// assert!(check_trace_size(1_000, 1_000).is_none());
/// assert!(check_trace_size(100_000, 100_000).is_some());
/// ```
#[must_use]
pub fn check_trace_size(source_len: usize, target_len: usize) -> Option<String> {
    let cells = (source_len + 1).checked_mul(target_len + 1);
    match cells {
        Some(cells) if cells <= MAX_TRACE_CELLS => None,
        _ => Some(format!(
            "Trace of {source_len} x {target_len} units exceeds maximum of {MAX_TRACE_CELLS} table cells; \
             rerun without --trace/--align to compute the distance only"
        )),
    }
}

/// Read a UTF-8 text file, rejecting files above [`MAX_INPUT_BYTES`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8, or is too large.
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    let display = path.display().to_string();
    let read_error = |source| InputError::Read {
        path: display.clone(),
        source,
    };

    let size = std::fs::metadata(path).map_err(read_error)?.len();
    if size > MAX_INPUT_BYTES {
        return Err(InputError::TooLarge {
            path: path.display().to_string(),
            size,
        });
    }

    std::fs::read_to_string(path).map_err(read_error)
}
