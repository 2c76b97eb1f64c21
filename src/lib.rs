//! A [disjoint-sets/union-find] implementation over arbitrary hashable elements.
//!
//! The main struct of this crate is [`DisjointSet<T>`] which keeps track of a partition of
//! elements of type `T` in disjoint subsets.
//! The elements are added with the `add` method and each start in their own subset.
//! These subsets can be joined with the `union` method.
//! You can check if elements share a subset with the `together` method and get the
//! representative of a subset with the `find` method.
//! The `union`, `together` and `find` methods are extremely fast and have an amortized
//! complexity of `O(α(n))` where 'α' is the inverse Ackermann function and length `n`.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//!
//! Every element is translated to a dense node id the moment it is added.
//! The forest of subsets is stored in a `Vec` indexed by these ids and uses path compression
//! together with union by rank.
//!
//! This can be used for example to keep track of the connected components of an undirected
//! graph whose vertices are not numbered, like coordinates or names.
//! It is also a key component in implementing Kruskal's algorithm to find the minimum spanning
//! tree of a graph.
//!
//! By default each node of the forest stores a tagged enum.
//! A more compact representation that stores a single `isize`, using the sign to tell roots
//! and children apart, can be enabled by adding the following to your `Cargo.toml` file:
//! ```toml
//! [dependencies.unionfind]
//! version = "0.1"
//! features = ["compact"]
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: disjoint_sets/disjoint_set/struct.DisjointSet.html

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod error;
pub mod disjoint_sets;

pub use crate::{
    disjoint_sets::disjoint_set::{DisjointSet, SubsetId},
    error::{Error, Result},
};
