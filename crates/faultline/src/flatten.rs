use crate::Fault;

impl Fault {
    /// Iterate over the terminal faults of this tree in discovery order.
    ///
    /// Nested aggregates are expanded in place, left to right, so the
    /// sequence reads exactly as the failures were originally collected:
    /// an aggregate over `[aggregate([c1, c2]), c3]` yields `c1, c2, c3`.
    /// A terminal fault yields just itself; aggregates with no terminal
    /// descendants yield nothing.
    ///
    /// The iterator is lazy and keeps its work-list on the heap, so nesting
    /// depth is bounded by memory rather than the call stack. Note that
    /// dropping an owned `Fault` still unwinds one frame per nesting level,
    /// as for any owned tree.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Collect every terminal fault of this tree in discovery order.
    pub fn flatten(&self) -> Vec<&Fault> {
        self.leaves().collect()
    }
}

/// Lazy iterator over terminal faults, created by [`Fault::leaves`].
#[derive(Debug)]
pub struct Leaves<'a> {
    stack: Vec<&'a Fault>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Fault;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(fault) = self.stack.pop() {
            match fault {
                Fault::Aggregate { children, .. } => {
                    // Reversed so pop order matches collection order.
                    self.stack.extend(children.iter().rev());
                }
                leaf => return Some(leaf),
            }
        }
        None
    }
}
