//! Store port for value table persistence.
//!
//! The learning core hands a store an opaque blob and asks for it back later;
//! it never learns what medium the blob lives on.

use crate::Result;

/// Port for persisting one serialized value table.
///
/// Each store is bound to its location when constructed, so there are no
/// implicit global file names.
///
/// # Examples
///
/// ```
/// use tictactoe_td::adapters::InMemoryStore;
/// use tictactoe_td::ports::ValueStore;
///
/// let store = InMemoryStore::new();
/// store.save(b"blob")?;
/// assert_eq!(store.load()?, b"blob".to_vec());
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
pub trait ValueStore: Send + Sync {
    /// Replace the stored blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be written.
    fn save(&self, blob: &[u8]) -> Result<()>;

    /// Read the stored blob back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingValueTable`] when nothing has been stored
    /// yet, or an I/O error if reading fails. Callers decide whether to
    /// start from an empty table.
    fn load(&self) -> Result<Vec<u8>>;

    /// Human-readable description of where the blob lives.
    fn location(&self) -> String;
}
