use dirgraph::{MinPriorityQueue, Queue, Stack};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8, u16),
    Remove,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            2 => (any::<u8>(), any::<u16>()).prop_map(|(p, v)| Operation::Insert(p, v)),
            1 => Just(Operation::Remove),
        ],
        1..200,
    )
}

proptest! {
    #[test]
    fn test_stack_matches_vec(ops in operations()) {
        let mut stack = Stack::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                Operation::Insert(_, v) => {
                    stack.push(v);
                    model.push(v);
                }
                Operation::Remove => prop_assert_eq!(stack.pop(), model.pop()),
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.peek(), model.last());
        }
    }

    #[test]
    fn test_queue_matches_vec_deque(ops in operations()) {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Operation::Insert(_, v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                Operation::Remove => prop_assert_eq!(queue.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.peek(), model.front());
        }
    }

    #[test]
    fn test_priority_queue_matches_stable_sorted_model(ops in operations()) {
        let mut pq = MinPriorityQueue::new();
        // (priority, insertion index, value); min of the first two is the expected head.
        let mut model: Vec<(u8, usize, u16)> = Vec::new();
        let mut inserted = 0usize;
        for op in ops {
            match op {
                Operation::Insert(p, v) => {
                    pq.enqueue(p, v);
                    model.push((p, inserted, v));
                    inserted += 1;
                }
                Operation::Remove => {
                    let head = model
                        .iter()
                        .enumerate()
                        .min_by_key(|(_, (p, seq, _))| (*p, *seq))
                        .map(|(i, _)| i);
                    let expected = head.map(|i| model.remove(i)).map(|(p, _, v)| (p, v));
                    prop_assert_eq!(pq.dequeue(), expected);
                }
            }
            prop_assert_eq!(pq.len(), model.len());
        }
    }
}
