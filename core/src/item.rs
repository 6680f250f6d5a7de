/*!
Item - fixed-size record shared with C callers

Memory Layout (64-bit):
- id: 4 bytes (i32) at offset 0
- name: 64 bytes (char[64]) at offset 4
- _padding: 4 bytes at offset 68
- value: 8 bytes (f64) at offset 72
  TOTAL: 80 bytes
*/

use crate::name::BoundedName;
use std::ffi::CStr;
use std::fmt;
use std::io::{self, Write};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: BoundedName,
    pub value: f64,
}

impl Item {
    pub fn new(id: i32, name: impl Into<BoundedName>, value: f64) -> Self {
        Item {
            id,
            name: name.into(),
            value,
        }
    }

    /// All fields zero, the state of a freshly `calloc`ed slot
    pub const fn zeroed() -> Self {
        Item {
            id: 0,
            name: BoundedName::empty(),
            value: 0.0,
        }
    }

    /// Overwrite every field in place.
    ///
    /// # Returns
    /// `true` if `name` was truncated to fit
    pub fn initialize(&mut self, id: i32, name: impl AsRef<[u8]>, value: f64) -> bool {
        self.id = id;
        let truncated = self.name.set(name.as_ref());
        self.value = value;
        truncated
    }

    /// Write the `Item(id=.., name='..', value=..)` line to `out`
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)?;
        out.flush()
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Six fractional digits, as printf's %f renders a double
        write!(
            f,
            "Item(id={}, name='{}', value={:.6})",
            self.id, self.name, self.value
        )
    }
}

/// Initialize `item` in place; does nothing if `item` or `name` is absent.
pub fn initialize_item(item: Option<&mut Item>, id: i32, name: Option<&CStr>, value: f64) {
    let (Some(item), Some(name)) = (item, name) else {
        tracing::debug!("initialize_item: absent item or name, skipped");
        return;
    };
    item.initialize(id, name.to_bytes(), value);
}

/// Print `item` to stdout; does nothing if absent.
pub fn print_item(item: Option<&Item>) {
    print_item_to(item, &mut io::stdout().lock());
}

/// Like printf, a failed write is logged but not returned to the caller.
fn print_item_to<W: Write>(item: Option<&Item>, out: &mut W) {
    let Some(item) = item else {
        return;
    };
    if let Err(err) = item.write_line(out) {
        tracing::debug!(%err, id = item.id, "print_item: write failed");
    }
}
