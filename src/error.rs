//! The errors returned by a [`DisjointSet`].
//!
//! [`DisjointSet`]: ../disjoint_sets/disjoint_set/struct.DisjointSet.html

/// The ways an operation on a `DisjointSet` can fail.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The element was never added to the `DisjointSet`.
    #[error("element was never added to the disjoint set")]
    UnknownElement,
    /// The element was already added, or appears twice in the same call.
    #[error("element was already added to the disjoint set")]
    DuplicateElement,
}

/// A `Result` with the error type of this crate.
pub type Result<T> = std::result::Result<T, Error>;
