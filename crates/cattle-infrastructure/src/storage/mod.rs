//! Storage layer for atomic file operations and blob stores.

mod atomic_file;
mod blob_store;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use blob_store::{FileBlobStore, InMemoryBlobStore};
