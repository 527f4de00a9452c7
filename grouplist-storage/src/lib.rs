//! Durable storage for the group catalog.
//!
//! The listing core only ever needs to reload everything, so the [`Storage`] trait
//! is limited to two bulk loads. [`FileStorage`] reads a directory of TOML files;
//! [`MemoryStorage`] keeps records in memory and can be told to fail.
#![deny(missing_docs)]

mod storage;
pub use storage::*;

mod record;
pub use record::*;

mod file;
pub use file::FileStorage;

mod memory;
pub use memory::MemoryStorage;
