//! Session-scoped navigation state for the community portal.
//!
//! - [`SessionScope`] owns the current [`Session`] and is injected into
//!   consumers; nothing here is a global.
//! - [`ViewRouter`] holds the active content view for one session.
//! - [`StatAggregator`] drives independent dashboard statistics.

pub mod router;
pub mod scope;
pub mod stats;

pub use router::{SubscriptionId, ViewRouter, ViewSnapshot};
pub use scope::{Session, SessionScope};
pub use stats::{StatAggregator, StatAggregatorBuilder, StatFuture, StatQueryState};
