//! compression/codecs/mod.rs
//! Stream codecs built on session handles.

pub mod deflate;

pub use deflate::*;
