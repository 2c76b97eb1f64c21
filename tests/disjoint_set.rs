#[macro_use]
extern crate unionfind;

use proptest::prelude::*;
use unionfind::{DisjointSet, Error};

/// A partition that relabels every member on each union.
struct Model {
    labels: Vec<usize>,
}

impl Model {
    fn new(len: usize) -> Self {
        Self {
            labels: (0 .. len).collect(),
        }
    }

    fn union(&mut self, first: usize, second: usize) {
        let (from, to) = (self.labels[first], self.labels[second]);

        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
    }

    fn together(&self, first: usize, second: usize) -> bool {
        self.labels[first] == self.labels[second]
    }
}

fn build(len: usize, unions: &[(usize, usize)]) -> DisjointSet<usize> {
    let mut disjoint_set = DisjointSet::with_capacity(len);
    disjoint_set.add(0 .. len).unwrap();

    for &(first, second) in unions {
        disjoint_set.union(&(first % len), &(second % len)).unwrap();
    }

    disjoint_set
}

fn unions_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize .. 25, prop::collection::vec((any::<usize>(), any::<usize>()), 0 .. 60))
}

#[test]
fn tuples_scenario() {
    let mut disjoint_set = DisjointSet::new();
    disjoint_set.add(vec![(1, 5)]).unwrap();
    disjoint_set.add(vec![(3, 0)]).unwrap();
    disjoint_set.add(vec![(7, 6)]).unwrap();
    disjoint_set.add(vec![(1, -1)]).unwrap();
    disjoint_set.add(vec![(1000, 3921)]).unwrap();

    assert_eq!(disjoint_set.together(&(1, 5), &(1, -1)), Ok(false));

    disjoint_set.union(&(1, 5), &(1, -1)).unwrap();

    assert_eq!(disjoint_set.together(&(1, 5), &(1, -1)), Ok(true));
    assert_eq!(disjoint_set.together(&(3, 0), &(1, 5)), Ok(false));
    assert_eq!(disjoint_set.subset_count(), 4);
}

#[test]
fn chain_of_unions_gives_one_subset() {
    let len = 10_000;
    let mut disjoint_set = DisjointSet::new();
    disjoint_set.add(1 ..= len).unwrap();

    for element in 1 .. len {
        disjoint_set.union(&element, &(element + 1)).unwrap();
    }

    assert_eq!(disjoint_set.together(&1, &len), Ok(true));

    let root = disjoint_set.find(&1).unwrap();
    for element in 1 ..= len {
        assert_eq!(disjoint_set.find(&element), Ok(root));
    }
    assert_eq!(disjoint_set.subset_count(), 1);
    assert_eq!(disjoint_set.len_of_subset(&len), Ok(len as usize));
}

#[test]
fn unknown_elements_are_rejected() {
    let mut disjoint_set = disjoint_set!["a", "b"];

    assert_eq!(disjoint_set.find("c"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.together("a", "c"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.together("c", "a"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.separate("c", "a"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.union("a", "c"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.union("c", "b"), Err(Error::UnknownElement));
    assert_eq!(disjoint_set.len_of_subset("c"), Err(Error::UnknownElement));
    assert!(disjoint_set.subset("c").is_err());

    assert_eq!(disjoint_set.together("a", "b"), Ok(false));
}

#[test]
fn duplicates_are_rejected_without_changes() {
    let mut disjoint_set = DisjointSet::new();
    disjoint_set.add(vec![String::from("a"), String::from("b")]).unwrap();
    disjoint_set.union("a", "b").unwrap();

    let before = disjoint_set.clone();

    assert_eq!(
        disjoint_set.add(vec![String::from("c"), String::from("a")]),
        Err(Error::DuplicateElement),
    );
    assert_eq!(
        disjoint_set.add(vec![String::from("d"), String::from("d")]),
        Err(Error::DuplicateElement),
    );
    assert_eq!(disjoint_set.insert(String::from("b")), Err(Error::DuplicateElement));

    assert_eq!(disjoint_set.len(), 2);
    assert!(!disjoint_set.contains("c"));
    assert!(!disjoint_set.contains("d"));
    assert_eq!(disjoint_set, before);
}

#[test]
fn extend_skips_present_elements() {
    let mut disjoint_set: DisjointSet<u8> = vec![1, 2, 3].into_iter().collect();
    disjoint_set.union(&1, &3).unwrap();

    disjoint_set.extend(vec![3, 4, 4, 5]);

    assert_eq!(disjoint_set.len(), 5);
    assert_eq!(disjoint_set.together(&1, &3), Ok(true));
    assert_eq!(disjoint_set.subset_count(), 4);

    disjoint_set.extend(&[6, 1]);
    assert_eq!(disjoint_set.len(), 6);

    let mut elements: Vec<u8> = disjoint_set.iter().cloned().collect();
    elements.sort();
    assert_eq!(elements, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn equality_ignores_roots() {
    let mut first = disjoint_set![1, 2, 3, 4];
    let mut second = disjoint_set![1, 2, 3, 4];

    first.union(&1, &2).unwrap();
    first.union(&3, &4).unwrap();
    second.union(&2, &1).unwrap();
    second.union(&4, &3).unwrap();
    assert_eq!(first, second);

    // {1, 2}, {3, 4} against {1, 2, 3, 4}.
    second.union(&1, &4).unwrap();
    assert_ne!(first, second);
    assert_ne!(second, first);

    // Same partition shape on different elements.
    let third = disjoint_set![1 => 'x', 2 => 'x', 3 => 'y', 5 => 'y'];
    assert_ne!(first, third);
}

#[test]
fn labeled_macro_matches_unions() {
    let labeled = disjoint_set![
        "ant" => 1,
        "bee" => 2,
        "cat" => 1,
        "dog" => 3,
        "eel" => 2,
    ];

    let mut unioned = disjoint_set!["ant", "bee", "cat", "dog", "eel"];
    unioned.union("ant", "cat").unwrap();
    unioned.union("bee", "eel").unwrap();

    assert_eq!(labeled, unioned);
    assert_eq!(
        labeled.subsets(),
        vec![vec![&"ant", &"cat"], vec![&"bee", &"eel"], vec![&"dog"]],
    );
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_collect() {
    use rayon::prelude::*;

    let disjoint_set: DisjointSet<u32> = (0 .. 1000u32).into_par_iter().map(|i| i % 100).collect();

    assert_eq!(disjoint_set.len(), 100);
    assert_eq!(disjoint_set.subset_count(), 100);

    let mut disjoint_set = disjoint_set;
    disjoint_set.par_extend((50 .. 150u32).into_par_iter());
    assert_eq!(disjoint_set.len(), 150);
}

proptest! {
    #[test]
    fn together_matches_model((len, unions) in unions_strategy()) {
        let disjoint_set = build(len, &unions);
        let mut model = Model::new(len);
        for &(first, second) in &unions {
            model.union(first % len, second % len);
        }

        for first in 0 .. len {
            for second in 0 .. len {
                prop_assert_eq!(
                    disjoint_set.together(&first, &second).unwrap(),
                    model.together(first, second)
                );
            }
        }
    }

    #[test]
    fn together_is_an_equivalence((len, unions) in unions_strategy()) {
        let disjoint_set = build(len, &unions);

        for a in 0 .. len {
            prop_assert!(disjoint_set.together(&a, &a).unwrap());

            for b in 0 .. len {
                let ab = disjoint_set.together(&a, &b).unwrap();
                prop_assert_eq!(ab, disjoint_set.together(&b, &a).unwrap());

                for c in 0 .. len {
                    if ab && disjoint_set.together(&b, &c).unwrap() {
                        prop_assert!(disjoint_set.together(&a, &c).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn union_is_idempotent((len, unions) in unions_strategy(), first in any::<usize>(), second in any::<usize>()) {
        let mut once = build(len, &unions);
        let mut twice = once.clone();

        once.union(&(first % len), &(second % len)).unwrap();
        twice.union(&(first % len), &(second % len)).unwrap();
        twice.union(&(first % len), &(second % len)).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn union_is_commutative((len, unions) in unions_strategy(), first in any::<usize>(), second in any::<usize>()) {
        let mut forward = build(len, &unions);
        let mut backward = forward.clone();

        forward.union(&(first % len), &(second % len)).unwrap();
        backward.union(&(second % len), &(first % len)).unwrap();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn find_does_not_change_the_partition((len, unions) in unions_strategy()) {
        let disjoint_set = build(len, &unions);
        let subsets: Vec<Vec<usize>> = disjoint_set.subsets()
            .into_iter()
            .map(|subset| subset.into_iter().cloned().collect())
            .collect();

        for element in 0 .. len {
            disjoint_set.find(&element).unwrap();
            disjoint_set.find(&element).unwrap();
        }

        let after: Vec<Vec<usize>> = disjoint_set.subsets()
            .into_iter()
            .map(|subset| subset.into_iter().cloned().collect())
            .collect();
        prop_assert_eq!(subsets, after);
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn arbitrary_sets_are_consistent(disjoint_set in any::<DisjointSet<u8>>()) {
        let subsets = disjoint_set.subsets();

        prop_assert_eq!(subsets.len(), disjoint_set.subset_count());
        prop_assert_eq!(subsets.iter().map(Vec::len).sum::<usize>(), disjoint_set.len());

        for subset in &subsets {
            for element in subset {
                prop_assert_eq!(disjoint_set.len_of_subset(*element).unwrap(), subset.len());
                prop_assert!(disjoint_set.together(*element, subset[0]).unwrap());

                let mut members: Vec<u8> = disjoint_set.subset(*element).unwrap().cloned().collect();
                members.sort();
                let mut expected: Vec<u8> = subset.iter().map(|&&member| member).collect();
                expected.sort();
                prop_assert_eq!(members, expected);
            }
        }
    }
}
