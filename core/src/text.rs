/*!
Owned C-string helpers

All allocations go through `try_reserve_exact`, so exhaustion is reported as
[`Error::Allocation`] instead of aborting the process.
*/

use crate::error::{Error, Result, require};
use std::ffi::{CStr, CString};

/// Build a `CString` from `parts`, which must hold no interior NUL and end
/// with exactly one NUL in the last part.
fn collect_terminated(parts: &[&[u8]], what: &'static str) -> Result<CString> {
    let len = parts.iter().map(|part| part.len()).sum();

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(Error::allocation(what))?;
    for part in parts {
        buf.extend_from_slice(part);
    }

    // SAFETY: every part comes from a `CStr`; only the final one keeps its
    // terminator, so `buf` has a single trailing NUL and none inside.
    Ok(unsafe { CString::from_vec_with_nul_unchecked(buf) })
}

/// Owned copy of `src`, including the empty string
pub fn duplicate(src: &CStr) -> Result<CString> {
    collect_terminated(&[src.to_bytes_with_nul()], "string copy")
}

/// Newly allocated `first` followed by `second`.
///
/// # Errors
/// [`Error::AbsentInput`] if either argument is `None`,
/// [`Error::Allocation`] if the result cannot be allocated.
pub fn concatenate(first: Option<&CStr>, second: Option<&CStr>) -> Result<CString> {
    let first = require(first, "first")?;
    let second = require(second, "second")?;

    collect_terminated(
        &[first.to_bytes(), second.to_bytes_with_nul()],
        "concatenated string",
    )
}
