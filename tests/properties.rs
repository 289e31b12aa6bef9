// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the container laws: doubling growth, deep-copy
//! isolation, move semantics, removal order, lexicographic comparison and
//! exactly-once drops.

use std::{cell::Cell, rc::Rc};

use dynamic_array::{DynamicArray, Error};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Emplace(i32),
    PopBack,
    PopFront,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => any::<i32>().prop_map(Op::Emplace),
        2 => Just(Op::PopBack),
        1 => Just(Op::PopFront),
        1 => Just(Op::Clear),
    ]
}

struct Counted {
    drops: Rc<Cell<usize>>,
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

proptest! {
    #[test]
    fn pushes_follow_doubling_law(n in 0usize..300) {
        let mut a = DynamicArray::new();
        let mut cap = a.capacity();
        prop_assert_eq!(cap, 1);
        for i in 0..n {
            a.push_back(i);
            let new_cap = a.capacity();
            prop_assert!(new_cap == cap || new_cap == cap * 2);
            prop_assert!(new_cap >= a.len());
            cap = new_cap;
        }
        prop_assert_eq!(a.len(), n);
        prop_assert_eq!(a.capacity(), n.max(1).next_power_of_two());
    }

    #[test]
    fn matches_vec_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut a = DynamicArray::new();
        let mut model: Vec<i32> = Vec::new();
        let mut max_cap = a.capacity();
        for op in ops {
            match op {
                Op::Push(x) => { a.push_back(x); model.push(x); }
                Op::Emplace(x) => {
                    let slot = a.emplace_back(|| x);
                    prop_assert_eq!(*slot, x);
                    model.push(x);
                }
                Op::PopBack => {
                    prop_assert_eq!(a.pop_back(), model.pop());
                }
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(a.pop_front(), expected);
                }
                Op::Clear => { a.clear(); model.clear(); }
            }
            // Capacity never shrinks.
            prop_assert!(a.capacity() >= max_cap);
            max_cap = a.capacity();
            prop_assert_eq!(a.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn clone_is_equal_and_isolated(v in prop::collection::vec(any::<i32>(), 0..64), x in any::<i32>()) {
        let a: DynamicArray<i32> = v.iter().copied().collect();
        let mut c = a.clone();
        prop_assert_eq!(&c, &a);
        prop_assert_eq!(c.capacity(), a.capacity());

        c.push_back(x);
        prop_assert_eq!(a.as_slice(), v.as_slice());
        prop_assert_ne!(&c, &a);
    }

    #[test]
    fn take_moves_everything(v in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut a: DynamicArray<u8> = v.iter().copied().collect();
        let cap = a.capacity();
        let b = a.take();
        prop_assert_eq!(b.as_slice(), v.as_slice());
        prop_assert_eq!(b.capacity(), cap);
        prop_assert!(a.is_empty());
        prop_assert_eq!(a.capacity(), 1);
    }

    #[test]
    fn pop_back_then_push_back_restores_len(v in prop::collection::vec(any::<i32>(), 1..64), x in any::<i32>()) {
        let mut a: DynamicArray<i32> = v.iter().copied().collect();
        let len = a.len();
        a.pop_back();
        a.push_back(x);
        prop_assert_eq!(a.len(), len);
        prop_assert_eq!(*a.back(), x);
    }

    #[test]
    fn pop_front_preserves_order(v in prop::collection::vec(any::<i32>(), 1..64)) {
        let mut a: DynamicArray<i32> = v.iter().copied().collect();
        prop_assert_eq!(a.pop_front(), Some(v[0]));
        prop_assert_eq!(a.as_slice(), &v[1..]);
    }

    #[test]
    fn ordering_is_lexicographic(
        x in prop::collection::vec(0u8..4, 0..8),
        y in prop::collection::vec(0u8..4, 0..8),
    ) {
        let a: DynamicArray<u8> = x.iter().copied().collect();
        let b: DynamicArray<u8> = y.iter().copied().collect();
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        prop_assert_eq!(a == b, x == y);
    }

    #[test]
    fn at_one_past_end_is_out_of_range(v in prop::collection::vec(any::<i32>(), 0..32)) {
        let a: DynamicArray<i32> = v.iter().copied().collect();
        let len = a.len();
        prop_assert_eq!(a.at(len), Err(Error::OutOfRange { index: len, len }));
    }

    #[test]
    fn every_element_is_dropped_exactly_once(rounds in prop::collection::vec(0usize..20, 0..10)) {
        let drops = Rc::new(Cell::new(0));
        let mut created = 0;
        {
            let mut a = DynamicArray::new();
            for n in rounds {
                for _ in 0..n {
                    a.push_back(Counted { drops: Rc::clone(&drops) });
                    created += 1;
                }
                if n % 2 == 0 {
                    drop(a.pop_front());
                }
                a.clear();
            }
            a.push_back(Counted { drops: Rc::clone(&drops) });
            created += 1;
        }
        prop_assert_eq!(drops.get(), created);
    }
}

#[test]
fn comparison_examples() {
    let a = |s: &[i32]| DynamicArray::from(s);
    assert!(a(&[1, 2, 3]) < a(&[1, 2, 4]));
    assert!(a(&[1, 2]) < a(&[1, 2, 3]));
    assert!(a(&[1, 2, 3]) == a(&[1, 2, 3]));
    assert!(a(&[2]) > a(&[1, 9, 9]));
}
