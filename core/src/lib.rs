/*!
itemkit - owned aggregates with a C-shaped surface

This crate holds the safe half of itemkit:
- [`Item`]: a `#[repr(C)]` record with an inline, bounded [`BoundedName`]
- [`Collection`]: an owned title plus a fixed-length run of items
- [`add`] and [`concatenate`]: the arithmetic and string primitives

The `itemkit-ffi` crate exposes the same operations to C.

```
use itemkit_core::{Collection, Item};

let collection = Collection::new(c"Inventory", 2)?;
assert_eq!(collection.items()[1], Item::new(1, "Item 2", 0.0));
collection.free();
# Ok::<(), itemkit_core::Error>(())
```
*/

pub mod arith;
pub mod collection;
pub mod error;
pub mod item;
pub mod name;
pub mod text;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use arith::add;
pub use collection::{Collection, create_collection, free_collection};
pub use error::{Error, Result};
pub use item::{Item, initialize_item, print_item};
pub use name::{BoundedName, MAX_NAME_LEN, NAME_CAPACITY};
pub use text::{concatenate, duplicate};
