/*!
Integer arithmetic
*/

/// Add two integers.
///
/// Overflow wraps around in two's complement, in debug and release builds
/// alike, so the result never traps.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
