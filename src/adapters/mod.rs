//! Adapters implementing the ports.
//!
//! Infrastructure implementations of the traits defined in [`crate::ports`]:
//! value stores, random sources and the terminal-driven human player.

pub mod file_store;
pub mod human;
pub mod in_memory_store;
pub mod random;

pub use file_store::FileStore;
pub use human::HumanPlayer;
pub use in_memory_store::InMemoryStore;
pub use random::{ScriptedRandom, SeededRandom};
