use data_structures::tree::Tree;

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

use crate::engine::TestEngine;

const TEST_BREADTH: usize = 20;
const TEST_DEPTH: i32 = 100;

/// A tree seeded with one random value and then filled with the engine's elements. Returns every
/// value that went in.
fn seeded_tree(engine: &TestEngine) -> (Tree<i32>, Vec<i32>) {
    let seed = engine.random_element();
    let mut tree = Tree::with_root(seed);
    for value in &engine.elements {
        tree.insert(*value);
    }

    let mut inserted = engine.elements.clone();
    inserted.push(seed);
    (tree, inserted)
}

#[test]
fn search() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let (tree, inserted) = seeded_tree(&engine);

    let absent = loop {
        let value = engine.absent_element();
        if !inserted.contains(&value) {
            break value;
        }
    };
    assert!(!tree.search(&absent));
    assert!(inserted.iter().all(|value| tree.search(value)));
}

#[test]
fn find_minimum_and_maximum() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let (tree, inserted) = seeded_tree(&engine);

    assert_eq!(tree.find_minimum(), inserted.iter().min());
    assert_eq!(tree.find_maximum(), inserted.iter().max());
}

#[test]
fn traverse() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let (tree, mut inserted) = seeded_tree(&engine);
    inserted.sort_unstable();

    let order = tree.traverse();
    assert_eq!(order.len(), tree.len());
    assert!(order.into_iter().eq(inserted.iter()));
    assert!(tree.iter().eq(inserted.iter()));
}

#[test]
fn insert() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let mut tree = Tree::with_root(engine.random_element());
    let mut expected_size = tree.len();

    for value in &engine.elements {
        tree.insert(*value);
        expected_size += 1;
        assert!(tree.search(value));
        assert_eq!(tree.len(), expected_size);
    }
}

#[test]
fn delete() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let (mut tree, mut remaining) = seeded_tree(&engine);
    let mut expected_size = tree.len();

    for value in &engine.elements {
        assert!(tree.search(value));
        assert_eq!(tree.delete(value), Some(*value));
        expected_size -= 1;

        let pos = remaining.iter().position(|x| x == value).unwrap();
        remaining.swap_remove(pos);

        // Only gone for good once every copy is deleted.
        assert_eq!(tree.search(value), remaining.contains(value));
        assert_eq!(tree.len(), expected_size);
    }
    assert_eq!(tree.len(), 1);
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn traverse_is_sorted_input(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.len() == sorted.len() && tree.traverse().into_iter().eq(sorted.iter())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;

    for delete in &deletes {
        let before = tree.len();
        match still_present.iter().position(|x| x == delete) {
            // One copy goes away per delete.
            Some(pos) => {
                still_present.swap_remove(pos);
                if tree.delete(delete) != Some(*delete) || tree.len() != before - 1 {
                    return false;
                }
            }
            None => {
                if tree.delete(delete).is_some() || tree.len() != before {
                    return false;
                }
            }
        }
    }

    still_present.iter().all(|x| tree.search(x))
        && deletes
            .iter()
            .filter(|x| !still_present.contains(*x))
            .all(|x| !tree.search(x))
}
