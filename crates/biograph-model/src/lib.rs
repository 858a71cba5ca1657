//! Biograph data model
//!
//! Shared record types for the biomedical question-answering pipeline:
//!
//! - [`QueryGraph`]: the abstract pattern of typed nodes/edges a client wants
//!   matched (query nodes may be marked `is_set`),
//! - [`KnowledgeGraph`]: the concrete entities/relationships retrieved to
//!   satisfy a query graph, each annotated with the query element it is
//!   bound to,
//! - [`Answer`]: one enumerated subgraph, expressed as node/edge bindings,
//! - [`Message`]: the envelope that carries both graphs and the produced
//!   answer list between pipeline stages.
//!
//! All fields are explicit: a missing binding is `None`, never an absent
//! attribute. Upstream stages build these graphs; the answer-enumeration
//! engine only reads them.

pub mod answer;
pub mod knowledge;
pub mod message;
pub mod query;

pub use answer::{Answer, EdgeBinding, NodeBinding};
pub use knowledge::{Edge, KnowledgeGraph, Node};
pub use message::Message;
pub use query::{QEdge, QNode, QueryGraph};
