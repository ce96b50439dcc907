//! Shared mock Graph context.
//!
//! DESIGN
//! ======
//! `MockGraph` is built explicitly at the call site and borrowed by every
//! service function: a session store and a latency value go in, nothing is
//! global. The original demo exports a singleton bound to browser storage;
//! swapping that for injected collaborators is what lets two contexts share
//! one "tab" (clone the store) or run at zero latency (tests).

use crate::latency::Latency;
use crate::store::SessionStore;

/// Context holding the injected collaborators of the mock responder.
#[derive(Debug, Clone)]
pub struct MockGraph<S: SessionStore> {
    pub store: S,
    pub latency: Latency,
}

impl<S: SessionStore> MockGraph<S> {
    /// Context with the demo's default 800ms latency.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, latency: Latency::default() }
    }

    #[must_use]
    pub fn with_latency(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
