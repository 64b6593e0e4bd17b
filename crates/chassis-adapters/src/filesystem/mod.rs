//! Local-disk and in-memory implementations of the filesystem port.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub(crate) use local::map_io_error;
pub use memory::MemoryFilesystem;
