/*!
String Operations - caller-owned C strings
*/

use crate::{guard, opt_cstr};
use std::ffi::{CString, c_char};
use std::ptr;

/// Concatenate two strings into a newly allocated one
///
/// Returns null if either argument is null or the allocation fails.
///
/// # Safety
/// Non-null arguments must be NUL-terminated strings.
/// The result must be released with [`free_string`], not libc `free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn concatenate_strings(
    str1: *const c_char,
    str2: *const c_char,
) -> *mut c_char {
    guard("concatenate_strings", ptr::null_mut(), || {
        let (first, second) = unsafe { (opt_cstr(str1), opt_cstr(str2)) };

        match itemkit_core::concatenate(first, second) {
            Ok(joined) => joined.into_raw(),
            Err(err) => {
                tracing::debug!(%err, "concatenate_strings returned null");
                ptr::null_mut()
            }
        }
    })
}

/// Release a string returned by [`concatenate_strings`]
///
/// # Safety
/// `s` must be null or a pointer from [`concatenate_strings`] that has not
/// been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    guard("free_string", (), || unsafe {
        drop(CString::from_raw(s));
    })
}
