//! String content validators used when emitting or checking str bodies.

/// Returns true if `bytes` is well-formed UTF-8.
///
/// Overlong encodings, surrogate code points and code points above
/// U+10FFFF are rejected.
#[inline]
pub fn utf8_check(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

/// Returns true if `bytes` is well-formed UTF-8 without any NUL character.
#[inline]
pub fn utf8_check_no_null(bytes: &[u8]) -> bool {
    str_check_no_null(bytes) && utf8_check(bytes)
}

/// Returns true if `bytes` contains no zero byte.
#[inline]
pub fn str_check_no_null(bytes: &[u8]) -> bool {
    !bytes.contains(&0)
}
