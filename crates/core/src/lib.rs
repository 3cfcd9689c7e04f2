//! Functional core of the storehouse service.
//!
//! Pure data types, validation and storage contracts. No I/O lives here; the
//! `storehouse` binary provides the repository implementations and HTTP shell.

pub mod catalog;
pub mod storage;
