pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Converts a signed, caller-supplied count of `T` elements into a `usize`.
///
/// Negative counts, and counts whose array of `T` exceeds `isize::MAX` bytes, are rejected
/// with [`ErrorKind::InvalidSize`](crate::ErrorKind::InvalidSize) rather than clamped, so
/// that `name` identifies which resource was refused.
#[inline]
pub fn verify_size<T>(name: &str, size: i64) -> Result<usize> {
    match usize::try_from(size) {
        Ok(n) if std::alloc::Layout::array::<T>(n).is_ok() => Ok(n),
        _ => invalid_size(name, size),
    }
}

#[cold]
pub fn invalid_size<T>(name: &str, size: i64) -> Result<T> {
    Err(crate::error::Error::invalid_size(name, size))
}
