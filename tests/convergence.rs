use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tricirc::exact::{exact_intersection_area, reference_circles};
use tricirc::mc::{estimate_area, BoundingPolicy};

fn mean_and_var(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>()
        / (n - 1.0);
    (mean, var)
}

fn estimates(policy: BoundingPolicy, n: usize, reps: usize) -> Vec<f64> {
    let [c1, c2, c3] = reference_circles();
    let mut rng = Xoshiro256Plus::seed_from_u64(0x00C0FFEE + n as u64);
    (0..reps)
        .map(|_| estimate_area(&c1, &c2, &c3, policy, n, &mut rng).unwrap())
        .collect()
}

#[test]
fn both_policies_land_near_the_analytic_area() {
    let [c1, c2, c3] = reference_circles();
    let exact = exact_intersection_area(&c1, &c2, &c3);
    let closed_form = 0.25 * std::f64::consts::PI + 1.25 * 0.8_f64.asin() - 1.0;
    assert::close(exact, closed_form, 1E-9);

    let mut rng = Xoshiro256Plus::seed_from_u64(0xDECAF);
    for policy in [BoundingPolicy::Wide, BoundingPolicy::Narrow] {
        let estimate =
            estimate_area(&c1, &c2, &c3, policy, 100_000, &mut rng).unwrap();
        println!("{}: {} (exact {})", policy, estimate, exact);
        assert!((estimate - exact).abs() < 0.05);
    }
}

#[test]
fn estimator_variance_shrinks_with_sample_count() {
    let reps = 20;
    for policy in [BoundingPolicy::Wide, BoundingPolicy::Narrow] {
        let (mean_small, var_small) =
            mean_and_var(&estimates(policy, 100, reps));
        let (mean_large, var_large) =
            mean_and_var(&estimates(policy, 100_000, reps));
        println!(
            "{}: n=100 mean {} var {}; n=100000 mean {} var {}",
            policy, mean_small, var_small, mean_large, var_large
        );
        assert!(var_large < var_small);
    }
}

#[test]
fn narrow_estimates_concentrate_tighter_than_wide() {
    // the narrow rectangle wastes fewer samples, so at equal n its
    // estimates spread less around the target
    let reps = 20;
    let (_, var_wide) =
        mean_and_var(&estimates(BoundingPolicy::Wide, 10_000, reps));
    let (_, var_narrow) =
        mean_and_var(&estimates(BoundingPolicy::Narrow, 10_000, reps));
    println!("wide var {} narrow var {}", var_wide, var_narrow);
    assert!(var_narrow < var_wide);
}

#[test]
fn seeded_runs_reproduce_bit_identical_series() {
    let run = || {
        let experiment = tricirc::experiment::Experiment::new(
            reference_circles(),
            vec![100, 600, 1100],
        )
        .unwrap();
        let mut rng = Xoshiro256Plus::seed_from_u64(0xB10C);
        experiment.run(&mut rng).unwrap()
    };
    let a = run();
    let b = run();
    for (ra, rb) in a.wide.iter().zip(b.wide.iter()) {
        assert_eq!(ra.estimate.to_bits(), rb.estimate.to_bits());
        assert_eq!(ra.deviation.to_bits(), rb.deviation.to_bits());
    }
    for (ra, rb) in a.narrow.iter().zip(b.narrow.iter()) {
        assert_eq!(ra.estimate.to_bits(), rb.estimate.to_bits());
    }
}
