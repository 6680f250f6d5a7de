/*!
Collection Operations - C-compatible layout for foreign hosts

The C side sees a plain struct it can read directly:

Memory Layout (64-bit):
- title: 8 bytes (char *) at offset 0
- items: 8 bytes (Item *) at offset 8
- item_count: 8 bytes (size_t) at offset 16
  TOTAL: 24 bytes

Both pointers are owned by the collection and released by `free_collection`.
*/

use crate::{guard, opt_cstr};
use itemkit_core::Item;
use std::alloc::{self, Layout};
use std::ffi::{CStr, CString, c_char};
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

/// C view of an owned [`itemkit_core::Collection`]
///
/// Only [`create_collection`] builds one, so the pointers are always owned and
/// consistent with `item_count`.
#[repr(C)]
#[derive(Debug)]
pub struct Collection {
    title: *mut c_char,
    items: *mut Item,
    item_count: usize,
}

impl Collection {
    /// Move `owned` behind a freshly allocated header.
    ///
    /// Returns `None` if the header cannot be allocated; `owned` is dropped
    /// in that case, so nothing stays allocated.
    fn into_raw(owned: itemkit_core::Collection) -> Option<NonNull<Collection>> {
        // SAFETY: Collection is not zero-sized.
        let slot = unsafe { alloc::alloc(Layout::new::<Collection>()) }.cast::<Collection>();
        let slot = NonNull::new(slot)?;

        let (title, items) = owned.into_parts();
        let header = Collection {
            item_count: items.len(),
            title: title.into_raw(),
            items: Box::into_raw(items).cast::<Item>(),
        };
        // SAFETY: `slot` is freshly allocated with the layout of Collection.
        unsafe { slot.as_ptr().write(header) };
        Some(slot)
    }

    pub fn title(&self) -> &CStr {
        // SAFETY: `title` came from CString::into_raw and is released only on drop.
        unsafe { CStr::from_ptr(self.title) }
    }

    pub fn items(&self) -> &[Item] {
        // SAFETY: `items` came from a boxed slice of exactly `item_count` items.
        unsafe { slice::from_raw_parts(self.items, self.item_count) }
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        // SAFETY: as in `items`, and `&mut self` makes the access exclusive.
        unsafe { slice::from_raw_parts_mut(self.items, self.item_count) }
    }

    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

impl Drop for Collection {
    fn drop(&mut self) {
        // SAFETY: both pointers came from `into_raw` and are reclaimed once;
        // the fields are cleared so they cannot be reclaimed again.
        let owned = unsafe {
            let title = CString::from_raw(mem::replace(&mut self.title, ptr::null_mut()));
            let items = Box::from_raw(ptr::slice_from_raw_parts_mut(
                mem::replace(&mut self.items, ptr::null_mut()),
                mem::take(&mut self.item_count),
            ));
            itemkit_core::Collection::from_parts(title, items)
        };
        owned.free();
    }
}

/// Create a collection with `item_count` default items
///
/// Item `i` has `id = i`, `name = "Item <i+1>"` and `value = 0.0`.
/// Returns null if `title` is null or any allocation fails; nothing is
/// leaked in that case.
///
/// # Safety
/// A non-null `title` must be a NUL-terminated string.
/// The result must be released with [`free_collection`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_collection(
    title: *const c_char,
    item_count: usize,
) -> *mut Collection {
    guard("create_collection", ptr::null_mut(), || {
        let title = unsafe { opt_cstr(title) };

        let owned = match itemkit_core::create_collection(title, item_count) {
            Ok(owned) => owned,
            Err(err) => {
                tracing::debug!(%err, item_count, "create_collection returned null");
                return ptr::null_mut();
            }
        };

        match Collection::into_raw(owned) {
            Some(collection) => collection.as_ptr(),
            None => {
                tracing::debug!(item_count, "create_collection: header allocation failed");
                ptr::null_mut()
            }
        }
    })
}

/// Release the title, then the items, then the collection itself
///
/// Does nothing if `collection` is null.
///
/// # Safety
/// `collection` must be null or a pointer from [`create_collection`] that
/// has not been released yet. It must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_collection(collection: *mut Collection) {
    if collection.is_null() {
        return;
    }
    guard("free_collection", (), || {
        // SAFETY: the header was allocated with the global allocator and the
        // layout of Collection, as Box expects. Drop releases the members
        // before the box frees the header.
        drop(unsafe { Box::from_raw(collection) });
    })
}
