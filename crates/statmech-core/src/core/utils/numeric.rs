/// Default relative tolerance for [`is_close_default`].
pub const DEFAULT_RTOL: f64 = 1e-5;
/// Default absolute tolerance for [`is_close_default`].
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Asymmetric closeness test: `|a - b| <= atol + rtol * |b|`.
///
/// The comparison is inclusive at the tolerance boundary and is not symmetric
/// in its arguments; `b` is the reference value that scales the relative term.
#[inline]
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/// [`is_close`] with the default tolerances.
#[inline]
pub fn is_close_default(a: f64, b: f64) -> bool {
    is_close(a, b, DEFAULT_RTOL, DEFAULT_ATOL)
}
