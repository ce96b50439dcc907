//! Page interaction behaviors.
//!
//! ARCHITECTURE
//! ============
//! Three independent behaviors with no shared state and no dependency on
//! the mock responder. Each is the decision logic of a browser behavior
//! lifted out of the DOM: callers feed in events (intersection reports,
//! plot sizes, copy requests) and get values back.

pub mod chart;
pub mod clipboard;
pub mod scroll_spy;
