use std::error::Error as StdError;

/// Render an error as a deterministic, locale-independent diagnostic line.
///
/// The output is the error's `Display` text followed by every error in its
/// [`source`](std::error::Error::source) chain, joined with `": "`. Rust's
/// formatting machinery never consults the process locale (`LC_ALL`, `LANG`,
/// or platform equivalents), so the same value renders byte-for-byte
/// identically in every environment; determinism beyond that is inherited
/// from the `Display` implementations involved. Cause chains are expected to
/// be finite and of modest depth; rendering walks them once.
///
/// Implemented for every error type, including `dyn Error` trait objects.
pub trait ToInvariantString {
    /// Format `self` and its cause chain as a single line.
    fn to_invariant_string(&self) -> String;
}

impl<E> ToInvariantString for E
where
    E: StdError + ?Sized,
{
    fn to_invariant_string(&self) -> String {
        let mut rendered = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            rendered.push_str(": ");
            rendered.push_str(&err.to_string());
            cause = err.source();
        }
        rendered
    }
}
