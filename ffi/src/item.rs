/*!
Item Operations - in-place initialization and printing
*/

use crate::{guard, opt_cstr};
use std::ffi::c_char;

pub use itemkit_core::Item;

/// Set every field of `item`, truncating `name` to 63 bytes
///
/// Does nothing if `item` or `name` is null.
///
/// # Safety
/// A non-null `item` must point to a writable [`Item`].
/// A non-null `name` must be a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn initialize_item(
    item: *mut Item,
    id: i32,
    name: *const c_char,
    value: f64,
) {
    guard("initialize_item", (), || {
        let (item, name) = unsafe { (item.as_mut(), opt_cstr(name)) };
        itemkit_core::initialize_item(item, id, name, value);
    })
}

/// Print `Item(id=.., name='..', value=..)` to stdout
///
/// Does nothing if `item` is null.
///
/// # Safety
/// A non-null `item` must point to a valid [`Item`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print_item(item: *const Item) {
    guard("print_item", (), || {
        itemkit_core::print_item(unsafe { item.as_ref() });
    })
}
