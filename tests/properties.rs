use proptest::prelude::*;

use hashtune::anneal::{AnnealConfig, AnnealRunner};
use hashtune::climb::{ClimbConfig, ClimbRunner};
use hashtune::cost::{CostModel, RehashMode, MIN_LOAD_FACTOR};
use hashtune::params::{perturb, HashParams, MIN_CAPACITY};
use hashtune::random::create_rng;
use hashtune::search::{Objective, TableObjective};

fn rehash_mode() -> impl Strategy<Value = RehashMode> {
    prop_oneof![Just(RehashMode::Quirk), Just(RehashMode::Rekey)]
}

proptest! {
    #[test]
    fn cost_is_finite_and_non_negative(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        m in 0u64..5_000,
        keys in prop::collection::vec(0u64..1_000_000, 0..200),
        mode in rehash_mode(),
    ) {
        let model = CostModel::default().with_rehash_mode(mode);
        let cost = model.evaluate(&HashParams::new(a, b, m), &keys);
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.0);
    }

    #[test]
    fn extreme_coefficients_do_not_overflow(
        a in prop_oneof![Just(i64::MIN), Just(i64::MAX)],
        b in prop_oneof![Just(i64::MIN), Just(i64::MAX)],
        keys in prop::collection::vec(any::<u64>(), 1..50),
    ) {
        let cost = CostModel::default().evaluate(&HashParams::new(a, b, 2), &keys);
        prop_assert!(cost.is_finite());
    }

    #[test]
    fn any_accepted_load_factor_evaluates_finitely(
        exponent in -32.0f64..2.0,
        a in -50i64..50,
        m in 2u64..64,
        keys in prop::collection::vec(1u64..1000, 0..40),
        mode in rehash_mode(),
    ) {
        let threshold = 2f64.powf(exponent).max(MIN_LOAD_FACTOR);
        let model = CostModel::new(threshold, mode).unwrap();
        let metrics = model.metrics(&HashParams::new(a, 1, m), &keys);
        prop_assert!(metrics.cost().is_finite());
        prop_assert!(metrics.rehash_count <= 64);
    }

    #[test]
    fn load_factors_below_the_floor_are_rejected(
        threshold in 0.0f64..MIN_LOAD_FACTOR,
        mode in rehash_mode(),
    ) {
        prop_assert!(CostModel::new(threshold, mode).is_err());
    }

    #[test]
    fn real_cost_is_finite_and_non_negative(
        a in -1000.0f64..1000.0,
        b in -1000.0f64..1000.0,
        m in 0u64..5_000,
        keys in prop::collection::vec(0u64..1_000_000, 0..200),
        mode in rehash_mode(),
    ) {
        let objective = TableObjective::new(CostModel::default().with_rehash_mode(mode), &keys);
        let cost = objective.cost_at([a, b, m as f64]);
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.0);
    }

    #[test]
    fn rehash_count_never_decreases_with_more_keys(
        a in 1i64..50,
        b in 0i64..50,
        m in 2u64..64,
        keys in prop::collection::vec(1u64..1000, 1..120),
        mode in rehash_mode(),
    ) {
        let model = CostModel::default().with_rehash_mode(mode);
        let params = HashParams::new(a, b, m);
        let mut previous = 0;
        for end in 0..=keys.len() {
            let metrics = model.metrics(&params, &keys[..end]);
            prop_assert!(metrics.rehash_count >= previous);
            prop_assert!(metrics.capacity >= params.m());
            previous = metrics.rehash_count;
        }
    }

    #[test]
    fn distinct_buckets_below_threshold_cost_zero(
        m in 4u64..400,
        b in 0i64..1000,
        fill in 0.0f64..=0.75,
    ) {
        let n = (m as f64 * fill).floor() as u64;
        let keys: Vec<u64> = (0..n).collect();
        let metrics = CostModel::default().metrics(&HashParams::new(1, b, m), &keys);
        prop_assert_eq!(metrics.collision_count, 0);
        prop_assert_eq!(metrics.rehash_count, 0);
        prop_assert_eq!(metrics.cost(), 0.0);
    }

    #[test]
    fn perturb_never_drops_capacity_below_floor(
        a in -100i64..100,
        b in -100i64..100,
        m in 0u64..6,
        step in 1i64..10,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let params = HashParams::new(a, b, m);
        for _ in 0..20 {
            prop_assert!(perturb(&params, step, &mut rng).m() >= MIN_CAPACITY);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn climb_best_cost_is_monotone(
        seed in any::<u64>(),
        keys in prop::collection::vec(1u64..1000, 0..80),
    ) {
        let objective = TableObjective::new(CostModel::default(), &keys);
        let config = ClimbConfig::default().with_iterations(150).with_seed(seed);
        let result = ClimbRunner::run(&objective, &config).unwrap();
        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert_eq!(result.best_cost, *result.cost_history.last().unwrap());
    }

    #[test]
    fn anneal_best_cost_is_monotone(
        seed in any::<u64>(),
        keys in prop::collection::vec(1u64..1000, 0..80),
    ) {
        let objective = TableObjective::new(CostModel::default(), &keys);
        let config = AnnealConfig::default().with_iterations(150).with_seed(seed);
        let result = AnnealRunner::run(&objective, &config).unwrap();
        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert_eq!(result.best_cost, *result.cost_history.last().unwrap());
    }
}
