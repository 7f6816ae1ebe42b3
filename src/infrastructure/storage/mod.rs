//! Selection store adapters.

mod file_selection_store;
mod memory_selection_store;

pub use file_selection_store::FileSelectionStore;
pub use memory_selection_store::MemorySelectionStore;
