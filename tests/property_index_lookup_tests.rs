use glchart::core::{SearchMode, search};
use proptest::prelude::*;

fn sorted_unique_keys() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..2_000).prop_map(|mut keys| {
        keys.sort_by(f64::total_cmp);
        keys.dedup();
        keys
    })
}

proptest! {
    #[test]
    fn exact_keys_round_trip(keys in sorted_unique_keys()) {
        for (index, key) in keys.iter().enumerate() {
            prop_assert_eq!(search(&keys, *key, SearchMode::Floor).expect("floor"), index);
            prop_assert_eq!(search(&keys, *key, SearchMode::Ceil).expect("ceil"), index);
        }
    }

    #[test]
    fn floor_and_ceil_bracket_target(keys in sorted_unique_keys(), target in -1.5e6f64..1.5e6) {
        let floor = search(&keys, target, SearchMode::Floor).expect("floor");
        let ceil = search(&keys, target, SearchMode::Ceil).expect("ceil");
        let last = keys.len() - 1;

        prop_assert!(floor <= ceil);
        if target < keys[0] {
            prop_assert_eq!((floor, ceil), (0, 0));
        } else if target > keys[last] {
            prop_assert_eq!((floor, ceil), (last, last));
        } else {
            prop_assert!(keys[floor] <= target);
            prop_assert!(keys[ceil] >= target);
            prop_assert!(ceil - floor <= 1);
        }
    }
}
