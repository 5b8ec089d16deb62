use data_structures::list::SinglyLinkedList;
use data_structures::Error;

use quickcheck_macros::quickcheck;

use crate::engine::TestEngine;

const TEST_BREADTH: usize = 20;
const TEST_DEPTH: i32 = 100;

fn filled_list(engine: &TestEngine) -> SinglyLinkedList<i32> {
    let mut list = SinglyLinkedList::new();
    for value in &engine.elements {
        list.insert_tail(*value);
    }
    list
}

#[test]
fn insert_head_and_tail() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let mut list = SinglyLinkedList::new();

    for (i, value) in engine.elements.iter().enumerate() {
        if i % 2 == 0 {
            list.insert_head(*value);
            assert_eq!(list.head(), Some(value));
        } else {
            list.insert_tail(*value);
            assert_eq!(list.tail(), Some(value));
        }
        assert_eq!(list.len(), i + 1);
    }
}

#[test]
fn insert_at() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let mut list = SinglyLinkedList::new();
    let mut expected = Vec::new();

    for (i, value) in engine.elements.iter().enumerate() {
        let index = i / 2;
        list.insert_at(index, *value).unwrap();
        expected.insert(index, *value);
    }
    assert!(list.iter().eq(expected.iter()));

    let len = list.len();
    assert_eq!(
        list.insert_at(len + 1, 0),
        Err(Error::OutOfRange {
            index: len + 1,
            len
        })
    );
    assert_eq!(list.len(), len);
}

#[test]
fn search() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let list = filled_list(&engine);

    assert_eq!(list.search(&engine.absent_element()), None);
    for value in &engine.elements {
        let first = engine.elements.iter().position(|x| x == value);
        assert_eq!(list.search(value), first);
    }
}

#[test]
fn delete_head_and_tail() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let mut list = filled_list(&engine);
    let mut expected = engine.elements.clone();

    while !expected.is_empty() {
        if expected.len() % 2 == 0 {
            assert_eq!(list.delete_head(), Ok(expected.remove(0)));
        } else {
            assert_eq!(list.delete_tail(), expected.pop().ok_or(Error::Empty));
        }
        assert_eq!(list.len(), expected.len());
        assert_eq!(list.head(), expected.first());
        assert_eq!(list.tail(), expected.last());
    }
    assert_eq!(list.delete_head(), Err(Error::Empty));
    assert_eq!(list.delete_tail(), Err(Error::Empty));
}

#[test]
fn delete() {
    let engine = TestEngine::new(TEST_BREADTH, TEST_DEPTH);
    let mut list = filled_list(&engine);
    let mut expected_size = list.len();

    assert_eq!(list.delete(&engine.absent_element()), Err(Error::NotFound));
    assert_eq!(list.len(), expected_size);

    for value in &engine.elements {
        assert_eq!(list.delete(value), Ok(*value));
        expected_size -= 1;
        assert_eq!(list.len(), expected_size);
    }
    assert!(list.is_empty());
    assert_eq!(list.tail(), None);
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let list: SinglyLinkedList<_> = xs.iter().copied().collect();

    list.len() == xs.len() && xs.iter().all(|x| list.search(x).is_some())
}

#[quickcheck]
fn delete_keeps_order(xs: Vec<i8>, target: i8) -> bool {
    let mut list: SinglyLinkedList<_> = xs.iter().copied().collect();
    let mut expected = xs;
    let outcome = list.delete(&target);

    match expected.iter().position(|x| *x == target) {
        Some(pos) => {
            expected.remove(pos);
            outcome == Ok(target) && list.iter().eq(expected.iter())
        }
        None => outcome == Err(Error::NotFound) && list.iter().eq(expected.iter()),
    }
}
