/*!
Collection - an owned title plus a fixed-length run of items

Construction either returns a complete collection or nothing: a failed item
allocation drops the already-duplicated title before the error is returned.
Releasing a collection consumes it, so the compiler rejects any later use.
*/

use crate::error::{Error, Result, require};
use crate::item::Item;
use crate::text;
use std::ffi::{CStr, CString};
use std::fmt::Write;

#[derive(Debug, PartialEq)]
pub struct Collection {
    // Declaration order is drop order: title first, then items.
    title: CString,
    items: Box<[Item]>,
}

impl Collection {
    /// Largest item count whose indices all fit in an `i32` id
    pub const MAX_ITEMS: usize = i32::MAX as usize + 1;

    /// Duplicate `title` and allocate `item_count` default items.
    ///
    /// Item `i` gets `id = i`, `name = "Item {i + 1}"` and `value = 0.0`.
    ///
    /// # Errors
    /// [`Error::TooManyItems`] if `item_count` exceeds [`Self::MAX_ITEMS`],
    /// [`Error::Allocation`] if the title or the items cannot be allocated.
    pub fn new(title: &CStr, item_count: usize) -> Result<Self> {
        if item_count > Self::MAX_ITEMS {
            return Err(Error::TooManyItems {
                requested: item_count,
                max: Self::MAX_ITEMS,
            });
        }

        let title = text::duplicate(title)?;
        let items = default_items(item_count)?;

        tracing::debug!(
            title_len = title.as_bytes().len(),
            item_count,
            "collection created"
        );
        Ok(Collection { title, items })
    }

    /// Reassemble a collection from parts produced by [`Self::into_parts`]
    pub fn from_parts(title: CString, items: Box<[Item]>) -> Self {
        Collection { title, items }
    }

    pub fn into_parts(self) -> (CString, Box<[Item]>) {
        let Collection { title, items } = self;
        (title, items)
    }

    /// Release the title, then the items, then the collection itself.
    ///
    /// Takes `self` by value, so the collection cannot be touched afterwards:
    ///
    /// ```compile_fail
    /// use itemkit_core::Collection;
    ///
    /// let collection = Collection::new(c"Test", 3).unwrap();
    /// collection.free();
    /// assert_eq!(collection.len(), 3);
    /// ```
    pub fn free(self) {
        tracing::debug!(
            title_len = self.title.as_bytes().len(),
            item_count = self.items.len(),
            "collection released"
        );
        let Collection { title, items } = self;
        drop(title);
        drop(items);
    }

    pub fn title(&self) -> &CStr {
        &self.title
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Number of items, fixed at construction
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Zeroed slots, then each populated with its index-derived defaults
fn default_items(count: usize) -> Result<Box<[Item]>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(Error::allocation("items"))?;
    items.resize(count, Item::zeroed());

    for (index, item) in items.iter_mut().enumerate() {
        // count <= MAX_ITEMS, so every index fits
        item.id = index as i32;
        // BoundedName truncates instead of failing
        let _ = write!(item.name, "Item {}", index + 1);
    }

    Ok(items.into_boxed_slice())
}

/// Create a collection; fails if `title` is absent.
pub fn create_collection(title: Option<&CStr>, item_count: usize) -> Result<Collection> {
    let title = require(title, "title")?;
    Collection::new(title, item_count)
}

/// Release `collection`; does nothing if absent.
pub fn free_collection(collection: Option<Collection>) {
    if let Some(collection) = collection {
        collection.free();
    }
}
