//! Store Module
//!
//! In-memory state shared by the credential and todo services. See
//! [`state::SharedStore`] for the locking rules.

pub mod state;

pub use state::SharedStore;
