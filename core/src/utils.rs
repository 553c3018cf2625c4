use num_enum::TryFromPrimitive;

use crate::types::Status;

/// Render a raw status code as `Z_NAME (code)`, or just the number for
/// codes outside the zlib table.
pub fn status_name(code: i32) -> String {
    match Status::try_from_primitive(code) {
        Ok(s) => format!("{} ({})", s, code),
        Err(_) => format!("unknown status ({})", code),
    }
}

// Helper function to flatten chunks into a single blob
pub fn frames_to_plaintext(frames: &[impl AsRef<[u8]>]) -> Vec<u8> {
    frames.iter()
        .flat_map(|f| f.as_ref())
        .copied()
        .collect()
}

/// `status_name` for by-reference callers (error message formatting).
pub(crate) fn status_label(code: &i32) -> String {
    status_name(*code)
}
