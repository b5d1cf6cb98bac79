use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// Load and save operate on whole snapshots; there are no partial updates.
/// Implementations decide where the data lives (file, memory in tests).
pub trait AddressBookRepository {
    /// Restore the last saved address book, or an empty one if nothing has
    /// been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
