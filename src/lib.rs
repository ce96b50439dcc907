//! mockgraph — in-process simulator of a Microsoft Graph-style API.
//!
//! ARCHITECTURE
//! ============
//! Two independent halves. The mock responder (`graph`, `session`, `store`,
//! `services`, `fixtures`) holds authentication state in a session-scoped
//! store and serves canned Graph-shaped payloads after a configurable
//! artificial delay. The page behaviors (`page`) are the DOM-free logic of
//! three demo-site interactions: scroll spy, a bar chart, clipboard copy.
//! Neither half knows about the other.
//!
//! ```no_run
//! use mockgraph::{Latency, MemoryStore, MockGraph};
//! use mockgraph::services::{auth, mail};
//!
//! # async fn demo() -> Result<(), mockgraph::GraphError> {
//! let graph = MockGraph::with_latency(MemoryStore::new(), Latency::none());
//! auth::login(&graph).await?;
//! let inbox = mail::get_messages(&graph, mail::DEFAULT_TOP).await?;
//! assert_eq!(inbox.value.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fixtures;
pub mod graph;
pub mod latency;
pub mod models;
pub mod page;
pub mod services;
pub mod session;
pub mod store;

pub use error::GraphError;
pub use graph::MockGraph;
pub use latency::Latency;
pub use session::SessionState;
pub use store::{MemoryStore, SessionStore};
