use crate::{Fault, ToInvariantString};

/// Format the most relevant diagnostic detail of `fault` as a single
/// locale-invariant string.
///
/// Terminal faults render directly: message plus cause chain. Aggregate
/// faults are flattened in discovery order and only the first terminal
/// fault is rendered, which keeps the diagnostic bounded no matter how
/// large the aggregate grows. The remaining terminals stay reachable
/// through [`Fault::leaves`]; they are only excluded from this string.
///
/// An aggregate with no terminal fault anywhere in its tree renders as its
/// own top-level message. The operation always succeeds, has no side
/// effects, and never mutates its input.
pub fn format_error_detail(fault: &Fault) -> String {
    if !fault.is_aggregate() {
        return fault.to_invariant_string();
    }
    match fault.leaves().next() {
        Some(first) => first.to_invariant_string(),
        // Zero children all the way down: the aggregate's own message is
        // the only detail left to report.
        None => fault.to_invariant_string(),
    }
}
