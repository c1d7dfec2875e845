use std::collections::VecDeque;

use proptest::prelude::*;
use ringdeque::RingDeque;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Shift,
    Pop,
    Reserve(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<i32>().prop_map(Op::Push),
        3 => Just(Op::Shift),
        3 => Just(Op::Pop),
        1 => any::<u8>().prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_behaves_like_vecdeque(ops in prop::collection::vec(op(), 0..300)) {
        let mut deque = RingDeque::new();
        let mut model = VecDeque::new();
        let mut capacity = 0;

        for op in ops {
            match op {
                Op::Push(value) => {
                    deque.push(value);
                    model.push_back(value);
                }
                Op::Shift => {
                    prop_assert_eq!(deque.shift(), model.pop_front().unwrap_or_default());
                }
                Op::Pop => {
                    prop_assert_eq!(deque.pop(), model.pop_back().unwrap_or_default());
                }
                Op::Reserve(additional) => {
                    deque.reserve(additional as usize);
                    prop_assert!(deque.capacity() - deque.len() >= additional as usize);
                }
                Op::Clear => {
                    deque.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
            prop_assert_eq!(deque.front(), model.front());
            prop_assert_eq!(deque.back(), model.back());
            prop_assert!(deque.capacity() >= capacity, "capacity never shrinks");
            prop_assert!(deque.capacity() == 0 || deque.capacity().is_power_of_two());
            prop_assert!(deque.capacity() == 0 || deque.capacity() >= 8);
            capacity = deque.capacity();
        }

        prop_assert!(deque.iter().eq(model.iter()));
        prop_assert_eq!(Vec::from(deque), Vec::from(model));
    }

    #[test]
    fn prop_shift_is_fifo(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut deque = values.iter().copied().collect::<RingDeque<_>>();
        let shifted = (0..values.len()).map(|_| deque.shift()).collect::<Vec<_>>();
        prop_assert_eq!(shifted, values);
        prop_assert!(deque.is_empty());
    }

    #[test]
    fn prop_pop_is_lifo(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut deque = RingDeque::new();
        for value in &values {
            deque.push(*value);
        }
        let mut popped = (0..values.len()).map(|_| deque.pop()).collect::<Vec<_>>();
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert!(deque.is_empty());
    }

    #[test]
    fn prop_steady_state_never_grows(len in 1usize..8, rounds in 0usize..500) {
        let mut deque = (0..len).collect::<RingDeque<_>>();
        for i in len..len + rounds {
            deque.push(i);
            prop_assert_eq!(deque.shift(), i - len);
        }
        prop_assert_eq!(deque.capacity(), 8);
        prop_assert!(deque.iter().copied().eq(rounds..rounds + len));
    }
}
