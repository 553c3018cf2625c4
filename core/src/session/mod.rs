//! session/mod.rs
//! zlib stream sessions: caller-owned handle, two-mode initializer, and
//! the incremental steps that drive an initialized handle.
//!
//! Lifecycle per handle:
//! `Uninitialized -> (initialize_* == Z_OK) -> Ready -> (*_end) -> Uninitialized`.
//! A failed initialize leaves the handle unusable; discard it.

pub mod handle;
pub mod init;
pub mod process;

pub use handle::{Allocator, StreamHandle};
pub use init::*;
pub use process::*;
