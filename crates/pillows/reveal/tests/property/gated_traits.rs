//! Property tests: every item of every window satisfies the trait rules.

use pillows_reveal::{QueryConfig, RandomWord, RangeQuery, Seed};
use pillows_traits::{check, derive};
use proptest::prelude::*;

fn arb_seed() -> impl Strategy<Value = Seed> {
    any::<[u8; 32]>()
        .prop_filter("seed must be non-zero", |bytes| bytes.iter().any(|b| *b != 0))
        .prop_map(|bytes| Seed::new(RandomWord::from_be_bytes(bytes)).unwrap())
}

fn arb_config() -> impl Strategy<Value = QueryConfig> {
    (1usize..64, any::<bool>(), 1u8..=100).prop_map(|(chunk_size, parallel, step)| QueryConfig {
        chunk_size,
        parallel,
        progress_step_percent: step,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn windows_are_complete_ordered_and_valid(
        seed in arb_seed(),
        from in 0u64..1_000_000,
        len in 0u64..200,
        config in arb_config(),
    ) {
        let to = from + len;
        let items: Vec<_> = RangeQuery::new(Some(seed), from, to, config).unwrap().collect();
        prop_assert_eq!(items.len() as u64, len + 1);

        for (offset, item) in items.iter().enumerate() {
            prop_assert_eq!(item.index, from + offset as u64);
            let traits = item.traits.into_traits().unwrap();
            prop_assert!(check(&traits).is_ok());
            prop_assert_eq!(traits, derive(&seed, item.index));
        }
    }

    #[test]
    fn inverted_windows_are_rejected(from in 1u64.., gap in 1u64..1_000) {
        let to = from.saturating_sub(gap);
        prop_assume!(to < from);
        prop_assert!(RangeQuery::new(None, from, to, QueryConfig::default()).is_err());
    }
}
