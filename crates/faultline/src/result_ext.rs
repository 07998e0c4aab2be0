use crate::detail::format_error_detail;
use crate::Fault;

/// Extension trait for emitting formatted diagnostics at subsystem
/// boundaries without contaminating control flow: each method logs the
/// detail of an `Err` and returns the result unchanged for the caller to
/// handle.
///
/// Example
/// ```
/// use faultline::{Fault, ResultExt};
///
/// let result: Result<(), Fault> = Err(Fault::msg("bad input"));
/// let result = result.emit_detail(); // logged via tracing, still Err for the caller
/// assert!(result.is_err());
/// ```
pub trait ResultExt<T> {
    /// Log the formatted detail of an `Err` at ERROR level.
    fn emit_detail(self) -> Self;

    /// Log the formatted detail of an `Err` at WARN level.
    fn emit_detail_warning(self) -> Self;
}

impl<T> ResultExt<T> for Result<T, Fault> {
    fn emit_detail(self) -> Self {
        if let Err(ref fault) = self {
            tracing::error!(detail = %format_error_detail(fault));
        }
        self
    }

    fn emit_detail_warning(self) -> Self {
        if let Err(ref fault) = self {
            tracing::warn!(detail = %format_error_detail(fault));
        }
        self
    }
}
