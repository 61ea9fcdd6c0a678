pub mod draft_store;
pub mod file_store;
pub mod memory_store;

pub use draft_store::LocalDraftStore;
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
