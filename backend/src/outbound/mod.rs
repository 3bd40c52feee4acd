//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **notion**: reqwest-backed page publisher for the Notion REST API
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod notion;
