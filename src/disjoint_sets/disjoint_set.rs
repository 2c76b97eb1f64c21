//! A [disjoint-sets/union-find] implementation over arbitrary hashable elements.
//!
//! See [`DisjointSet<T>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: struct.DisjointSet.html

use {
    std::{
        borrow::Borrow,
        cmp::Ordering,
        collections::{
            HashSet,
            hash_map::{self, HashMap, RandomState},
        },
        fmt,
        hash::{BuildHasher, Hash},
        iter::{
            FromIterator,
            FusedIterator,
        },
    },
    crate::{
        disjoint_sets::node::Node,
        error::{Error, Result},
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Identifies the subset an element belongs to.
///
/// This is the node id of the root of the subset, as returned by [`find`].
/// Two elements are in the same subset exactly when `find` gives the same `SubsetId`.
/// A `SubsetId` is only meaningful until the next call to `union`, which can change the root.
///
/// [`find`]: struct.DisjointSet.html#method.find
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubsetId(usize);

impl SubsetId {
    /// Returns the node id of the root of the subset.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A [disjoint-sets/union-find] implementation over arbitrary hashable elements.
///
/// Each element added to the `DisjointSet` gets a node id, these are handed out in the order the
/// elements were added starting at 0.
/// Initially each element has its own subset but subsets can be joined with the `union` method.
/// Every operation takes the elements themselves, or any borrowed form of them, and
/// translates them to their node id.
///
/// The subsets are stored as a forest indexed by node id.
/// Finding the root of an element compresses the path to the root, and a union always hangs the
/// tree of lowest rank below the other root.
/// Because the path is compressed through interior mutability the `find` and `together`
/// methods only need a shared reference, this also means a `DisjointSet` is not `Sync`.
///
/// # Examples
///
/// ```
/// use unionfind::DisjointSet;
///
/// # fn main() -> unionfind::Result<()> {
/// let mut disjoint_set = DisjointSet::new();
/// disjoint_set.add(vec!["a", "b", "c", "d"])?;
///
/// disjoint_set.union("b", "c")?;
/// disjoint_set.union("c", "d")?;
///
/// assert!(disjoint_set.together("b", "d")?);
/// assert!(!disjoint_set.together("a", "d")?);
/// assert!(disjoint_set.together("e", "a").is_err());
/// # Ok(())
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet<T, S = RandomState> {
    /// Maps each element to its node id.
    map: HashMap<T, usize, S>,
    /// The forest, this vec will always have the same size as `map`.
    nodes: Vec<Node>,
}

/// Creates a [`DisjointSet`] containing the arguments.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] containing a given list of elements all in distinct subsets:
///
/// ```
/// # #[macro_use]
/// # extern crate unionfind;
/// #
/// # fn main() {
/// let disjoint_set = disjoint_set!['a', 'b', 'c'];
///
/// assert!(disjoint_set.len() == 3);
/// assert!(disjoint_set.subset_count() == 3);
/// # }
/// ```
///
/// - Create a [`DisjointSet`] containing a given list of elements in the subsets specified:
///
/// ```
/// # #[macro_use]
/// # extern crate unionfind;
/// #
/// # fn main() {
/// let disjoint_set = disjoint_set![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(disjoint_set.together(&'a', &'e').unwrap());
/// assert!(disjoint_set.together(&'b', &'d').unwrap());
/// assert!(disjoint_set.len_of_subset(&'c').unwrap() == 1);
/// # }
/// ```
///
/// You can use any labels that implement `Hash` and `Eq`.
/// Elements with the same label will be placed in the same subset.
/// These labels will only be used when constructing a [`DisjointSet`]
/// and will not be stored further.
///
/// Elements that are listed more than once are only added once, in both forms.
///
/// [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($($elem: expr),*) => {
        <$crate::DisjointSet<_> as ::std::iter::FromIterator<_>>::from_iter(vec![$($elem),*])
    };
    ($($elem: expr,)*) => {
        $crate::disjoint_set![$($elem),*]
    };
    ($($elem: expr => $set: expr),*) => {
        $crate::DisjointSet::from_labeled(vec![$(($elem, $set)),*])
    };
    ($($elem: expr => $set: expr,)*) => {
        $crate::disjoint_set![$($elem => $set),*]
    }
}

impl<T> DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    /// Constructs a new, empty `DisjointSet<T>`.
    ///
    /// The `DisjointSet<T>` will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use unionfind::DisjointSet;
    ///
    /// let mut disjoint_set: DisjointSet<u32> = DisjointSet::new();
    /// assert!(disjoint_set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Constructs a new, empty `DisjointSet<T>` with the specified capacity.
    ///
    /// The `DisjointSet<T>` will be able to hold at least `capacity`
    /// elements without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionfind::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::with_capacity(10);
    ///
    /// assert!(disjoint_set.len() == 0);
    /// assert!(disjoint_set.capacity() >= 10);
    ///
    /// // This can be done without reallocating.
    /// disjoint_set.add(0 .. 10).unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// This method is used by the `disjoint_set!` macro and the proptest strategy.
    ///
    /// Elements that share a label are placed in the same subset.
    #[doc(hidden)]
    pub fn from_labeled<L, I>(iter: I) -> Self where
        L: Eq + Hash,
        I: IntoIterator<Item = (T, L)>,
    {
        let iter = iter.into_iter();
        let mut disjoint_set = Self::with_capacity(iter.size_hint().0);
        // We map a label to the index of an element with that label.
        let mut labels = HashMap::new();

        for (element, label) in iter {
            let index = match disjoint_set.map.get(&element) {
                Some(&index) => index,
                None => disjoint_set.push(element),
            };

            match labels.entry(label) {
                hash_map::Entry::Occupied(occupied) => {
                    disjoint_set.union_indices(index, *occupied.get());
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(index);
                },
            }
        }

        disjoint_set
    }
}

impl<T, S> DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Constructs a new, empty `DisjointSet<T, S>` which will use the given hash builder
    /// to hash the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    /// use unionfind::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::with_hasher(RandomState::new());
    /// disjoint_set.add(vec![1, 2]).unwrap();
    /// assert!(disjoint_set.len() == 2);
    /// ```
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
            nodes: Vec::new(),
        }
    }

    /// Constructs a new, empty `DisjointSet<T, S>` with the specified capacity,
    /// using the given hash builder to hash the elements.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds the given elements, each in a new subset of its own.
    ///
    /// The elements get consecutive node ids in the order they are given.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateElement` if one of the elements was already added or
    /// if an element is given twice.
    /// Nothing is added in that case.
    ///
    /// # Panics
    ///
    /// With the `compact` feature this panics if the amount of elements overflows an `isize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionfind::{DisjointSet, Error};
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.add(vec![(1, 5), (3, 0), (7, 6)]).unwrap();
    ///
    /// assert!(disjoint_set.add(vec![(1, -1), (3, 0)]) == Err(Error::DuplicateElement));
    /// assert!(disjoint_set.add(vec![(2, 2), (2, 2)]) == Err(Error::DuplicateElement));
    ///
    /// // The failed calls did not add anything.
    /// assert!(disjoint_set.len() == 3);
    /// assert!(!disjoint_set.contains(&(1, -1)));
    /// ```
    pub fn add<I>(&mut self, elements: I) -> Result<()> where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();

        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if self.map.contains_key(element) || !seen.insert(element) {
                log::debug!("rejected adding {} elements: one was already added", elements.len());
                return Err(Error::DuplicateElement)
            }
        }
        drop(seen);

        self.reserve(elements.len());
        for element in elements {
            self.push(element);
        }

        Ok(())
    }

    /// Adds a single element in a new subset of its own and returns the `SubsetId` of that subset.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateElement` if the element was already added.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionfind::{DisjointSet, Error};
    ///
    /// let mut disjoint_set = DisjointSet::new();
    ///
    /// let id = disjoint_set.insert("north").unwrap();
    /// assert!(disjoint_set.find("north") == Ok(id));
    /// assert!(disjoint_set.insert("north") == Err(Error::DuplicateElement));
    /// ```
    pub fn insert(&mut self, element: T) -> Result<SubsetId> {
        if self.map.contains_key(&element) {
            log::debug!("rejected adding an element that was already added");
            return Err(Error::DuplicateElement)
        }

        Ok(SubsetId(self.push(element)))
    }

    /// Gives the `SubsetId` of the subset that `element` belongs to.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function. Every element of a subset gives the same value.
    /// Every node on the way to the root is pointed directly at the root, which does not change
    /// any subset.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `element` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> unionfind::Result<()> {
    /// let mut disjoint_set = unionfind::DisjointSet::new();
    /// disjoint_set.add(vec![String::from("x"), String::from("y"), String::from("z")])?;
    ///
    /// disjoint_set.union("x", "z")?;
    ///
    /// assert!(disjoint_set.find("x")? == disjoint_set.find("z")?);
    /// assert!(disjoint_set.find("x")? != disjoint_set.find("y")?);
    /// assert!(disjoint_set.find("w").is_err());
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn find<Q>(&self, element: &Q) -> Result<SubsetId> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(SubsetId(self.find_root(self.index_of(element)?)))
    }

    /// Returns `true` if `first` and `second` are in the same subset.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `first` or `second` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() -> unionfind::Result<()> {
    /// let mut disjoint_set = disjoint_set![0, 1, 2, 3];
    ///
    /// disjoint_set.union(&1, &3)?;
    /// disjoint_set.union(&0, &1)?;
    ///
    /// assert!(disjoint_set.together(&0, &1)?);
    /// assert!(!disjoint_set.together(&0, &2)?);
    /// assert!(disjoint_set.together(&0, &3)?);
    /// assert!(!disjoint_set.together(&1, &2)?);
    /// assert!(disjoint_set.together(&1, &3)?);
    /// assert!(!disjoint_set.together(&2, &3)?);
    /// assert!(disjoint_set.together(&2, &2)?);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn together<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool> where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let first_index = self.index_of(first)?;
        let second_index = self.index_of(second)?;

        Ok(self.find_root(first_index) == self.find_root(second_index))
    }

    /// Returns `true` if `first` and `second` are in different subsets.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `first` or `second` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() -> unionfind::Result<()> {
    /// let mut disjoint_set = disjoint_set![0, 1, 2];
    ///
    /// disjoint_set.union(&1, &2)?;
    ///
    /// assert!(disjoint_set.separate(&0, &1)?);
    /// assert!(!disjoint_set.separate(&1, &2)?);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn separate<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool> where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        Ok(!self.together(first, second)?)
    }

    /// Joins the subsets of `first` and `second`.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function. The inverse Ackermann function has value below 5
    /// for any value of `n` that can be written in the physical universe.
    ///
    /// The root of the tree with the highest rank becomes the root of the joined subset.
    /// When both ranks are equal the root of `second` is kept and its rank grows by one.
    /// Joining two elements that already share a subset does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `first` or `second` was never added.
    /// Nothing is changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() -> unionfind::Result<()> {
    /// let mut disjoint_set = disjoint_set![0, 1, 2, 3];
    ///
    /// // All elements start out in their own subsets.
    /// assert!(disjoint_set.subset_count() == 4);
    ///
    /// disjoint_set.union(&1, &2)?;
    ///
    /// // Now 1 and 2 share a subset.
    /// assert!(disjoint_set.together(&1, &2)?);
    /// assert!(disjoint_set.len_of_subset(&1)? == 2);
    /// assert!(disjoint_set.subset_count() == 3);
    ///
    /// disjoint_set.union(&2, &3)?;
    ///
    /// // We added 3 to the existing subset with 1 and 2.
    /// assert!(disjoint_set.len_of_subset(&3)? == 3);
    /// assert!(disjoint_set.union(&2, &4).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn union<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<()> where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let first_index = self.index_of(first)?;
        let second_index = self.index_of(second)?;

        self.union_indices(first_index, second_index);

        Ok(())
    }

    /// Returns `true` if `element` was added to the `DisjointSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() {
    /// let disjoint_set = disjoint_set!["left", "right"];
    ///
    /// assert!(disjoint_set.contains("left"));
    /// assert!(!disjoint_set.contains("up"));
    /// # }
    /// ```
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(element)
    }

    /// Returns the amount of elements in the subset that `element` belongs to.
    ///
    /// This will be done in `O(n α(n))` time.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `element` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() -> unionfind::Result<()> {
    /// let mut disjoint_set = disjoint_set![0, 1, 2];
    ///
    /// assert!(disjoint_set.len_of_subset(&0)? == 1);
    ///
    /// disjoint_set.union(&0, &2)?;
    ///
    /// assert!(disjoint_set.len_of_subset(&0)? == 2);
    /// assert!(disjoint_set.len_of_subset(&1)? == 1);
    /// assert!(disjoint_set.len_of_subset(&2)? == 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn len_of_subset<Q>(&self, element: &Q) -> Result<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let root = self.find_root(self.index_of(element)?);

        Ok((0 .. self.len()).filter(|&index| self.find_root(index) == root).count())
    }

    /// Returns an iterator over the elements of the subset that `element` belongs to.
    ///
    /// The order the elements are returned in is not specified.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownElement` if `element` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() -> unionfind::Result<()> {
    /// let disjoint_set = disjoint_set![
    ///     'a' => "first subset",
    ///     'b' => "first subset",
    ///     'c' => "second subset",
    /// ];
    ///
    /// let mut subset: Vec<char> = disjoint_set.subset(&'b')?.cloned().collect();
    /// subset.sort();
    ///
    /// assert!(subset == vec!['a', 'b']);
    /// # Ok(())
    /// # }
    /// ```
    pub fn subset<Q>(&self, element: &Q) -> Result<Subset<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let root = self.find_root(self.index_of(element)?);

        Ok(Subset {
            nodes: &self.nodes,
            entries: self.map.iter(),
            root,
        })
    }

    /// Reserves capacity for at least `additional` more elements to be
    /// added to the `DisjointSet<T, S>`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows a `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
        self.nodes.reserve(additional);
    }

    /// Shrinks the capacity of the `DisjointSet<T, S>` as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
        self.nodes.shrink_to_fit();
    }

    /// Returns the node id of `element`.
    fn index_of<Q>(&self, element: &Q) -> Result<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self.map.get(element) {
            Some(&index) => Ok(index),
            None => {
                log::debug!("lookup of an element that was never added");
                Err(Error::UnknownElement)
            },
        }
    }

    /// Adds an element that is not yet in the map and returns its node id.
    fn push(&mut self, element: T) -> usize {
        let index = self.nodes.len();

        self.nodes.push(Node::new(index));
        self.map.insert(element, index);

        index
    }
}

impl<T, S> DisjointSet<T, S> {
    /// Returns the amount of elements in the `DisjointSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// # fn main() {
    /// let disjoint_set = disjoint_set![1, 2, 3];
    /// assert!(disjoint_set.len() == 3);
    /// # }
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the `DisjointSet` contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements the `DisjointSet` can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        usize::min(self.map.capacity(), self.nodes.capacity())
    }

    /// Returns a reference to the hash builder of the `DisjointSet`.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the amount of subsets in the `DisjointSet`.
    ///
    /// This method will be executed in `O(n α(n))` where `α` is the inverse Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// #
    /// # fn main() {
    /// let disjoint_set = disjoint_set![
    ///     8 => 0,
    ///     3 => 1,
    ///     4 => 0,
    ///     5 => 1,
    ///     7 => 2,
    /// ];
    ///
    /// assert!(disjoint_set.subset_count() == 3);
    /// # }
    /// ```
    pub fn subset_count(&self) -> usize {
        let mut done = bit_vec![false; self.len()];
        let mut count = 0;

        for index in 0 .. self.len() {
            let root = self.find_root(index);

            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Returns all subsets of the `DisjointSet`.
    ///
    /// The elements of each subset are in the order they were added and the subsets are
    /// ordered by their first element.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate unionfind;
    /// #
    /// # fn main() {
    /// let disjoint_set = disjoint_set![
    ///     'a' => 0,
    ///     'b' => 1,
    ///     'c' => 0,
    ///     'd' => 2,
    ///     'e' => 1,
    /// ];
    ///
    /// assert!(disjoint_set.subsets() == vec![vec![&'a', &'c'], vec![&'b', &'e'], vec![&'d']]);
    /// # }
    /// ```
    pub fn subsets(&self) -> Vec<Vec<&T>> {
        let mut subsets: Vec<Vec<&T>> = Vec::new();
        // The position in `subsets` of the subset of each root.
        let mut positions = vec![!0; self.len()];

        for (index, element) in self.elements_by_index().into_iter().enumerate() {
            let root = self.find_root(index);

            if positions[root] == !0 {
                positions[root] = subsets.len();
                subsets.push(Vec::new());
            }
            subsets[positions[root]].push(element);
        }

        subsets
    }

    /// Returns an iterator over all elements of the `DisjointSet`.
    ///
    /// The order the elements are returned in is not specified.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            keys: self.map.keys(),
        }
    }

    /// Gives the root of the tree that `index` belongs to.
    ///
    /// First we walk up to the root and then we walk the same path again pointing every node
    /// directly at the root.
    /// This is done without recursion so deep trees can not overflow the stack.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find_root(&self, index: usize) -> usize {
        let mut root = index;
        while let Some(parent) = self.nodes[root].parent() {
            root = parent;
        }

        let mut current = index;
        while let Some(parent) = self.nodes[current].parent() {
            self.nodes[current].set_parent(root);
            current = parent;
        }

        root
    }

    /// Joins the trees of `first_index` and `second_index`.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub(crate) fn union_indices(&mut self, first_index: usize, second_index: usize) {
        let i = self.find_root(first_index);
        let j = self.find_root(second_index);

        if i == j {
            return
        }

        // We add to the tree with the highest rank.
        match Ord::cmp(&self.nodes[i].rank(), &self.nodes[j].rank()) {
            Ordering::Less => {
                self.nodes[i].set_parent(j);
                log::trace!("joined the subset of node {} into the subset of node {}", i, j);
            },
            Ordering::Equal => {
                let rank = self.nodes[j].rank();
                // We add the first tree to the second tree.
                self.nodes[i].set_parent(j);
                // The second tree becomes larger.
                self.nodes[j].set_rank(rank + 1);
                log::trace!("joined the subset of node {} into the subset of node {}", i, j);
            },
            Ordering::Greater => {
                self.nodes[j].set_parent(i);
                log::trace!("joined the subset of node {} into the subset of node {}", j, i);
            },
        }
    }

    /// Returns the elements ordered by their node id.
    fn elements_by_index(&self) -> Vec<&T> {
        let mut entries: Vec<(usize, &T)> = self.map.iter()
            .map(|(element, &index)| (index, element))
            .collect();
        entries.sort_unstable_by_key(|&(index, _)| index);

        entries.into_iter().map(|(_, element)| element).collect()
    }
}

impl<T, S> Default for DisjointSet<T, S> where
    S: Default,
{
    fn default() -> Self {
        Self {
            map: HashMap::default(),
            nodes: Vec::new(),
        }
    }
}

impl<T, S> fmt::Debug for DisjointSet<T, S> where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut names = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();

        for (index, element) in self.elements_by_index().into_iter().enumerate() {
            let root = self.find_root(index);
            let new_name = names.len();
            let name = *names.entry(root).or_insert(new_name);

            builder.entry(&format_args!("{:?} => {}", element, name));
        }

        builder.finish()
    }
}

impl<T, S> PartialEq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Two `DisjointSet`s are equal if they have the same elements divided in the same subsets.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false
        }

        // The roots of one side have to correspond one to one with the roots of the other side.
        let mut forward = HashMap::with_capacity(self.len());
        let mut backward = HashMap::with_capacity(self.len());

        for (element, &index) in &self.map {
            let other_index = match other.map.get(element) {
                Some(&other_index) => other_index,
                None => return false,
            };

            let self_root = self.find_root(index);
            let other_root = other.find_root(other_index);

            if *forward.entry(self_root).or_insert(other_root) != other_root {
                return false
            }
            if *backward.entry(other_root).or_insert(self_root) != self_root {
                return false
            }
        }

        true
    }
}

impl<T, S> Eq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{}

/// Adds every element that was not added yet, elements that are already present are skipped.
impl<T, S> Extend<T> for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = T> {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for element in iter {
            if !self.map.contains_key(&element) {
                self.push(element);
            }
        }
    }
}

impl<'a, T, S> Extend<&'a T> for DisjointSet<T, S> where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = &'a T> {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, S> FromIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        let mut disjoint_set = Self::default();
        disjoint_set.extend(iter);

        disjoint_set
    }
}

impl<'a, T, S> IntoIterator for &'a DisjointSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "rayon")]
impl<T, S> ParallelExtend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = T> {
        // The elements are produced in parallel but the forest is only touched by this thread.
        let elements: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(elements);
    }
}

#[cfg(feature = "rayon")]
impl<T, S> FromParallelIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash + Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = T> {
        let mut disjoint_set = Self::default();
        disjoint_set.par_extend(par_iter);

        disjoint_set
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for DisjointSet<T> where
    T: Arbitrary + Eq + Hash + 'static,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (size_range, params) = params;

        proptest::collection::vec((any_with::<T>(params), any::<usize>()), size_range)
            .prop_map(|pairs| {
                // Few trailing zeros are common so this gives a few large subsets and some
                // small ones.
                Self::from_labeled(pairs.into_iter().map(|(element, label)| {
                    (element, label.trailing_zeros())
                }))
            })
            .boxed()
    }
}

/// An iterator over a subset in a `DisjointSet<T>`.
///
/// This struct is created by the [`subset`] method on [`DisjointSet<T>`].
/// See its documentation for more.
///
/// [`subset`]: struct.DisjointSet.html#method.subset
/// [`DisjointSet<T>`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Subset<'a, T: 'a> {
    nodes: &'a [Node],
    entries: hash_map::Iter<'a, T, usize>,
    root: usize,
}

impl<'a, T> Subset<'a, T> {
    /// Returns `true` if the node at `index` is in the tree of `self.root`.
    fn is_member(&self, mut index: usize) -> bool {
        while let Some(parent) = self.nodes[index].parent() {
            index = parent;
        }

        index == self.root
    }
}

impl<'a, T> Iterator for Subset<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // We keep going until we find an element in the subset.
        loop {
            let (element, &index) = self.entries.next()?;

            if self.is_member(index) {
                return Some(element)
            }
        }
    }
}

impl<'a, T> FusedIterator for Subset<'a, T> {}

/// An iterator over all elements in a `DisjointSet<T>`.
///
/// This struct is created by the [`iter`] method on [`DisjointSet<T>`].
///
/// [`iter`]: struct.DisjointSet.html#method.iter
/// [`DisjointSet<T>`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Iter<'a, T: 'a> {
    keys: hash_map::Keys<'a, T, usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.keys.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
