//! Ordering tests driven by caller-supplied comparators
//!
//! Elements here carry a key plus the fields the comparator looks at, and the
//! tests check the exact pop order the comparator implies.

use phpq::{ByKey, PairingHeap, Reversed};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Task {
    key: char,
    priority: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    key: char,
    x: i32,
    y: i32,
}

fn tasks() -> [Task; 3] {
    [
        Task { key: 'A', priority: 3 },
        Task { key: 'B', priority: 1 },
        Task { key: 'C', priority: 2 },
    ]
}

fn by_priority(a: &Task, b: &Task) -> Ordering {
    a.priority.cmp(&b.priority)
}

fn pop_keys<C: phpq::Comparator<Task>>(mut queue: PairingHeap<Task, C>) -> Vec<char> {
    std::iter::from_fn(|| queue.pop()).map(|task| task.key).collect()
}

#[test]
fn test_creates_empty_queue() {
    let queue: PairingHeap<Task, _> = PairingHeap::with_comparator(by_priority);
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
}

#[test]
fn test_push_returns_new_length() {
    let mut queue = PairingHeap::with_comparator(by_priority);
    let [a, b, c] = tasks();
    assert_eq!(queue.push(a), 1);
    assert_eq!(queue.push(b), 2);
    assert_eq!(queue.push(c), 3);
}

#[test]
fn test_push_all_adds_every_item() {
    let mut queue = PairingHeap::with_comparator(by_priority);
    assert_eq!(queue.push_all(tasks()), 3);
    assert_eq!(queue.push_all(Vec::new()), 3);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_function_determines_priority() {
    let mut queue = PairingHeap::with_comparator(by_priority);
    for task in tasks() {
        queue.push(task);
    }
    assert_eq!(pop_keys(queue), vec!['B', 'C', 'A']);
}

#[test]
fn test_function_can_reverse_priority() {
    let mut queue =
        PairingHeap::with_comparator(|a: &Task, b: &Task| b.priority.cmp(&a.priority));
    for task in tasks() {
        queue.push(task);
    }
    assert_eq!(pop_keys(queue), vec!['A', 'C', 'B']);
}

#[test]
fn test_reversed_wrapper_matches_reversed_closure() {
    let mut queue = PairingHeap::with_comparator(Reversed(by_priority));
    queue.push_all(tasks());
    assert_eq!(pop_keys(queue), vec!['A', 'C', 'B']);
}

#[test]
fn test_by_key_comparator() {
    let mut queue = PairingHeap::with_comparator(ByKey(|task: &Task| task.priority));
    queue.push_all(tasks());
    assert_eq!(pop_keys(queue), vec!['B', 'C', 'A']);
}

#[test]
fn test_multiple_properties_for_priority() {
    let mut queue = PairingHeap::with_comparator(|a: &Point, b: &Point| {
        if a.y == b.y {
            a.x.cmp(&b.x)
        } else {
            a.y.cmp(&b.y)
        }
    });
    queue.push(Point { key: 'A', x: 3, y: 2 });
    queue.push(Point { key: 'B', x: 1, y: 2 });
    queue.push(Point { key: 'C', x: 2, y: 1 });

    let order: Vec<char> = std::iter::from_fn(|| queue.pop()).map(|p| p.key).collect();
    assert_eq!(order, vec!['C', 'B', 'A']);
}

#[test]
fn test_peek_returns_highest_priority_without_removing() {
    let mut queue = PairingHeap::with_comparator(by_priority);
    queue.push_all(tasks());

    assert_eq!(queue.peek().map(|t| t.key), Some('B'));
    assert_eq!(queue.peek().map(|t| t.key), Some('B'));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_equal_priorities_peek_first_pushed() {
    let mut queue = PairingHeap::with_comparator(by_priority);
    for key in ['X', 'Y', 'Z'] {
        queue.push(Task { key, priority: 7 });
    }
    assert_eq!(queue.peek().map(|t| t.key), Some('X'));

    queue.push(Task { key: 'W', priority: 7 });
    assert_eq!(queue.peek().map(|t| t.key), Some('X'));
}

#[test]
fn test_bulk_build_keeps_first_of_equal_minimums() {
    let items = vec![
        Task { key: 'P', priority: 4 },
        Task { key: 'Q', priority: 2 },
        Task { key: 'R', priority: 2 },
        Task { key: 'S', priority: 9 },
    ];
    let queue = PairingHeap::from_vec_with(items, by_priority);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek().map(|t| t.key), Some('Q'));
    assert_eq!(queue.check_invariants(), Ok(()));
}

#[test]
fn test_comparator_accessor() {
    let queue: PairingHeap<Task, _> = PairingHeap::with_comparator(Reversed(by_priority));
    let [a, b, _] = tasks();
    assert_eq!(phpq::Comparator::compare(queue.comparator(), &a, &b), Ordering::Less);
}
