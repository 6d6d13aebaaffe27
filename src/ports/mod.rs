//! Ports (trait boundaries) for external collaborators.
//!
//! The learning core owns these traits; adapters in [`crate::adapters`]
//! implement them for files, memory, terminals and random number generators.

pub mod agent;
pub mod observer;
pub mod random;
pub mod store;

pub use agent::Agent;
pub use observer::Observer;
pub use random::RandomSource;
pub use store::ValueStore;
