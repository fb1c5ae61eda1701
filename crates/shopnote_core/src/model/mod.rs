//! Domain model: wire-facing and stored record shapes.
//!
//! # Responsibility
//! - Define the wire types exchanged with clients and the row types
//!   persisted in SQLite.
//! - Provide pure mapping between the two shapes, in both directions.
//!
//! # Invariants
//! - Wire inputs never carry identity; the server assigns IDs during
//!   draft-to-row mapping.
//! - Wire outputs always carry identity (and timestamps, for notes).
//! - Mapping functions perform no I/O and cannot fail.

pub mod note;
pub mod shopping;
