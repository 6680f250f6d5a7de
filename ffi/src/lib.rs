/*!
itemkit C ABI

Exports the itemkit operations under their C names (see `include/itemkit.h`).
Edition 2024 compliant with proper unsafe annotations.

Ownership across the boundary:
- `concatenate_strings` returns a string the caller releases with `free_string`
- `create_collection` returns a collection the caller releases with `free_collection`

Null arguments never fault: functions returning a pointer return null, the
others do nothing. Panics are caught before they reach the caller.
*/

pub mod collection;
pub mod item;
pub mod strings;

// Re-export main types
pub use collection::{Collection, create_collection, free_collection};
pub use item::{Item, initialize_item, print_item};
pub use strings::{concatenate_strings, free_string};

use std::ffi::{CStr, c_char};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Add two integers, wrapping on overflow
#[unsafe(no_mangle)]
pub extern "C" fn add_numbers(a: i32, b: i32) -> i32 {
    itemkit_core::add(a, b)
}

/// Run `body`, returning `fallback` if it panics.
pub(crate) fn guard<T>(function: &'static str, fallback: T, body: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|_| {
        tracing::error!(function, "panic caught at the C boundary");
        fallback
    })
}

/// Borrow a C string argument; null becomes `None`.
///
/// # Safety
/// A non-null `ptr` must point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn opt_cstr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_numbers() {
        assert_eq!(add_numbers(5, 7), 12);
        assert_eq!(add_numbers(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_guard_passes_value_through() {
        assert_eq!(guard("test", 0, || 42), 42);
    }

    #[test]
    fn test_guard_catches_panic() {
        let result = guard("test", -1, || -> i32 { panic!("boom") });
        assert_eq!(result, -1);
    }

    #[test]
    fn test_opt_cstr() {
        unsafe {
            assert!(opt_cstr(std::ptr::null()).is_none());
            assert_eq!(opt_cstr(c"hi".as_ptr()), Some(c"hi"));
        }
    }
}
