/*!
Bounded Name - fixed-capacity, always-terminated text

Memory layout matches a C `char name[64]` field: 64 bytes, no padding.
At most 63 bytes of text are stored; byte 63 is reserved for the terminator,
so the buffer always contains a NUL.
*/

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::ffi::{CStr, c_char};
use std::fmt;

/// Size of the inline name buffer, terminator included
pub const NAME_CAPACITY: usize = 64;

/// Longest text a name can hold
pub const MAX_NAME_LEN: usize = NAME_CAPACITY - 1;

/// Length of `src` up to its first NUL, like `strlen` over a slice.
fn text_len(src: &[u8]) -> usize {
    src.iter().position(|&b| b == 0).unwrap_or(src.len())
}

/// Inline name buffer with silent truncation at [`MAX_NAME_LEN`] bytes
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct BoundedName([u8; NAME_CAPACITY]);

impl BoundedName {
    /// An all-zero buffer, i.e. the empty name
    pub const fn empty() -> Self {
        BoundedName([0; NAME_CAPACITY])
    }

    /// Build a name from `src`, truncating to [`MAX_NAME_LEN`] bytes.
    ///
    /// Copying stops at the first NUL in `src`.
    pub fn new(src: &[u8]) -> Self {
        let mut name = Self::empty();
        name.set(src);
        name
    }

    /// Build a name from `src`, failing instead of truncating.
    pub fn try_new(src: &[u8]) -> Result<Self> {
        let len = text_len(src);
        if len > MAX_NAME_LEN {
            return Err(Error::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self::new(src))
    }

    /// Replace the stored text with `src`.
    ///
    /// Behaves like `strncpy(buf, src, 63)` followed by `buf[63] = 0`: at most
    /// 63 bytes are copied, the remainder of the buffer is zeroed.
    ///
    /// # Returns
    /// `true` if `src` did not fit and was truncated
    pub fn set(&mut self, src: &[u8]) -> bool {
        let len = text_len(src);
        let stored = len.min(MAX_NAME_LEN);

        self.0[..stored].copy_from_slice(&src[..stored]);
        self.0[stored..].fill(0);

        let truncated = len > stored;
        if truncated {
            tracing::trace!(len, stored, "name truncated");
        }
        truncated
    }

    /// Stored bytes, terminator excluded
    pub fn to_bytes(&self) -> &[u8] {
        // Foreign code may have overwritten the terminator; never read past byte 63.
        let len = text_len(&self.0[..MAX_NAME_LEN]);
        &self.0[..len]
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.to_bytes())
    }

    pub fn len(&self) -> usize {
        self.to_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }

    /// Pointer to the NUL-terminated buffer, valid while `self` is
    pub fn as_ptr(&self) -> *const c_char {
        self.0.as_ptr().cast()
    }
}

impl Default for BoundedName {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for BoundedName {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BoundedName {}

impl PartialEq<str> for BoundedName {
    fn eq(&self, other: &str) -> bool {
        self.to_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for BoundedName {
    fn eq(&self, other: &&str) -> bool {
        self.to_bytes() == other.as_bytes()
    }
}

impl From<&str> for BoundedName {
    fn from(src: &str) -> Self {
        Self::new(src.as_bytes())
    }
}

impl From<&CStr> for BoundedName {
    fn from(src: &CStr) -> Self {
        Self::new(src.to_bytes())
    }
}

/// Appends, truncating once the buffer is full; never reports an error.
impl fmt::Write for BoundedName {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let start = self.len();
        let bytes = &s.as_bytes()[..text_len(s.as_bytes())];
        let take = bytes.len().min(MAX_NAME_LEN - start);

        self.0[start..start + take].copy_from_slice(&bytes[..take]);
        self.0[start + take..].fill(0);
        Ok(())
    }
}

impl fmt::Debug for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedName")
            .field(&self.to_string_lossy())
            .finish()
    }
}

impl fmt::Display for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::{assert_eq_align, assert_eq_size};
    use std::fmt::Write;

    assert_eq_size!(BoundedName, [c_char; NAME_CAPACITY]);
    assert_eq_align!(BoundedName, c_char);

    #[test]
    fn test_new_short_name() {
        let name = BoundedName::from("widget");
        assert_eq!(name, "widget");
        assert_eq!(name.len(), 6);
        assert!(!name.is_empty());
    }

    #[test]
    fn test_empty_name() {
        let name = BoundedName::from("");
        assert!(name.is_empty());
        assert_eq!(name.to_bytes(), b"");
        assert_eq!(name, BoundedName::empty());
    }

    #[test]
    fn test_exactly_max_len_is_not_truncated() {
        let src = "a".repeat(MAX_NAME_LEN);
        let mut name = BoundedName::empty();

        assert!(!name.set(src.as_bytes()));
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert_eq!(name.0[MAX_NAME_LEN], 0);
    }

    #[test]
    fn test_oversized_name_is_truncated_to_63_bytes() {
        let src = "x".repeat(200);
        let mut name = BoundedName::empty();

        assert!(name.set(src.as_bytes()));
        assert_eq!(name.len(), 63);
        assert_eq!(name.to_bytes(), &src.as_bytes()[..63]);
        assert_eq!(name.0[63], 0);
    }

    #[test]
    fn test_copy_stops_at_nul() {
        let name = BoundedName::new(b"abc\0def");
        assert_eq!(name, "abc");
        assert!(name.0[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_clears_previous_text() {
        let mut name = BoundedName::from("a much longer name");
        name.set(b"short");

        assert_eq!(name, "short");
        assert!(name.0[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_try_new_rejects_oversized() {
        let src = [b'n'; 64];
        let err = BoundedName::try_new(&src).unwrap_err();
        assert!(matches!(err, Error::NameTooLong { len: 64, max: 63 }));

        assert!(BoundedName::try_new(&src[..63]).is_ok());
    }

    #[test]
    fn test_from_c_str() {
        let name = BoundedName::from(c"from C");
        assert_eq!(name, "from C");
    }

    #[test]
    fn test_fmt_write_appends_and_truncates() {
        let mut name = BoundedName::empty();
        write!(name, "Item {}", 42).unwrap();
        assert_eq!(name, "Item 42");

        write!(name, "{}", "z".repeat(100)).unwrap();
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert!(name.to_bytes().starts_with(b"Item 42zzz"));
    }

    #[test]
    fn test_missing_terminator_reads_at_most_63_bytes() {
        let name = BoundedName([b'q'; NAME_CAPACITY]);
        assert_eq!(name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_as_ptr_is_terminated() {
        let name = BoundedName::from("ptr");
        let c = unsafe { CStr::from_ptr(name.as_ptr()) };
        assert_eq!(c.to_bytes(), b"ptr");
    }

    #[test]
    fn test_display_and_debug() {
        let name = BoundedName::from("shown");
        assert_eq!(name.to_string(), "shown");
        assert_eq!(format!("{:?}", name), "BoundedName(\"shown\")");
    }

    proptest! {
        #[test]
        fn prop_stored_prefix_and_terminator(src in proptest::collection::vec(1u8..=255, 0..200)) {
            let mut name = BoundedName::empty();
            let truncated = name.set(&src);

            let stored = src.len().min(MAX_NAME_LEN);
            prop_assert_eq!(truncated, src.len() > MAX_NAME_LEN);
            prop_assert_eq!(name.to_bytes(), &src[..stored]);
            prop_assert!(name.0[stored..].iter().all(|&b| b == 0));
        }
    }
}
