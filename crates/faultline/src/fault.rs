use std::error::Error as StdError;
use std::sync::Arc;

/// Message used by [`Fault::aggregate`] when no explicit one is supplied.
pub const DEFAULT_AGGREGATE_MESSAGE: &str = "one or more failures occurred";

/// A failure value: either a single terminal error or an ordered aggregate
/// of failures observed together, e.g. from concurrent or batched work.
///
/// Leaves wrap any [`std::error::Error`] behind an [`Arc`], so a `Fault`
/// stays cheap to clone and safe to share across threads while the wrapped
/// error's message and cause chain remain reachable through `Display` and
/// [`source`](std::error::Error::source).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Fault {
    /// A single terminal failure. Display and the cause chain defer to the
    /// wrapped error.
    #[error(transparent)]
    Leaf(Arc<dyn StdError + Send + Sync>),

    /// An ordered aggregate of child faults, with a message of its own.
    ///
    /// Children never surface through `source()`; they are reached with
    /// [`Fault::children`], [`Fault::leaves`], or [`Fault::flatten`], which
    /// keeps the choice of which child to report in exactly one place.
    #[error("{message}")]
    Aggregate {
        /// Top-level description of the aggregate as a whole.
        message: String,
        /// Child faults in the order they were collected.
        children: Vec<Fault>,
    },
}

impl Fault {
    /// Wrap any error as a terminal fault.
    ///
    /// Note that a `Fault` wrapped this way is itself terminal: its children
    /// (if it was an aggregate) are no longer visible to flattening. Build
    /// nested aggregates with [`Fault::aggregate`] instead.
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Fault::Leaf(Arc::new(err))
    }

    /// Terminal fault carrying only a message, with no cause chain.
    pub fn msg(message: impl Into<String>) -> Self {
        Fault::Leaf(Arc::new(MessageError(message.into())))
    }

    /// Aggregate over `children` with [`DEFAULT_AGGREGATE_MESSAGE`].
    pub fn aggregate(children: impl IntoIterator<Item = Fault>) -> Self {
        Self::aggregate_with_message(DEFAULT_AGGREGATE_MESSAGE, children)
    }

    /// Aggregate over `children` with an explicit top-level message.
    pub fn aggregate_with_message(
        message: impl Into<String>,
        children: impl IntoIterator<Item = Fault>,
    ) -> Self {
        Fault::Aggregate {
            message: message.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Whether this fault aggregates child faults.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Fault::Aggregate { .. })
    }

    /// Child faults in their original order; empty for terminal faults.
    pub fn children(&self) -> &[Fault] {
        match self {
            Fault::Aggregate { children, .. } => children,
            Fault::Leaf(_) => &[],
        }
    }
}

/// Carrier for faults built from a bare message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
struct MessageError(String);
