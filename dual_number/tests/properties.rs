use approx::assert_relative_eq;
use dual_number::{DualNumber, Result};
use num_dual::{Dual64, DualNum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 200;
const STEP: f64 = 1e-6;
const TOLERANCE: f64 = 1e-6;

fn central_difference(f: impl Fn(f64) -> Result<f64>, x: f64) -> f64 {
    let forward = f(x + STEP).unwrap();
    let backward = f(x - STEP).unwrap();
    (forward - backward) / (2.0 * STEP)
}

fn check_against_finite_difference(
    name: &str,
    f: impl Fn(DualNumber) -> Result<DualNumber>,
    range: std::ops::Range<f64>,
) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..SAMPLES {
        let x = rng.gen_range(range.clone());
        let analytic = f(DualNumber::variable(x)).unwrap().tangent();
        let numeric = central_difference(|x| Ok(f(DualNumber::constant(x))?.primal()), x);
        let error = (analytic - numeric).abs();
        assert!(
            error <= TOLERANCE * analytic.abs().max(1.0),
            "{name}'({x}) = {analytic}, finite difference {numeric}"
        );
    }
}

#[test]
fn ln_matches_finite_difference() {
    check_against_finite_difference("ln", |x| x.ln(), 0.1..10.0);
}

#[test]
fn sin_matches_finite_difference() {
    check_against_finite_difference("sin", |x| Ok(x.sin()), -10.0..10.0);
}

#[test]
fn cos_matches_finite_difference() {
    check_against_finite_difference("cos", |x| Ok(x.cos()), -10.0..10.0);
}

#[test]
fn exp_matches_finite_difference() {
    check_against_finite_difference("exp", |x| Ok(x.exp()), -3.0..3.0);
}

#[test]
fn composite_matches_finite_difference() {
    // sin(x)·exp(x) / (1 + x²)
    check_against_finite_difference(
        "composite",
        |x| (x.sin() * x.exp()) / (1.0 + x * x),
        -2.0..2.0,
    );
}

#[test]
fn random_binary_operations_follow_the_rules() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let a = DualNumber::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let b = DualNumber::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let c: f64 = rng.gen_range(-10.0..10.0);

        let sum = a + b;
        assert_eq!(sum.primal(), a.primal() + b.primal());
        assert_eq!(sum.tangent(), a.tangent() + b.tangent());

        let product = a * b;
        assert_relative_eq!(
            product.tangent(),
            a.primal() * b.tangent() + a.tangent() * b.primal(),
            max_relative = 1e-9
        );

        assert_eq!((a * c).tangent(), a.tangent() * c);
        assert_eq!((a - c).tangent(), a.tangent());
    }
}

#[test]
fn separate_passes_do_not_interfere() {
    let f = |x1: DualNumber, x2: DualNumber| -> Result<DualNumber> {
        Ok(x1.ln()? + x1 * x2 - x2.sin())
    };
    let x1_first = f(DualNumber::new(2.0, 1.0), DualNumber::new(5.0, 0.0)).unwrap();
    let x2_pass = f(DualNumber::new(2.0, 0.0), DualNumber::new(5.0, 1.0)).unwrap();
    let x1_again = f(DualNumber::new(2.0, 1.0), DualNumber::new(5.0, 0.0)).unwrap();

    assert_eq!(x1_first.tangent().to_bits(), x1_again.tangent().to_bits());
    assert_eq!(x1_first.primal().to_bits(), x2_pass.primal().to_bits());
    assert_relative_eq!(x1_first.tangent(), 5.5);
}

#[test]
fn agrees_with_num_dual() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..SAMPLES {
        let x1: f64 = rng.gen_range(0.1..10.0);
        let x2: f64 = rng.gen_range(-10.0..10.0);

        for (s1, s2) in [(1.0, 0.0), (0.0, 1.0), (0.3, -0.7)] {
            let ours = {
                let a = DualNumber::new(x1, s1);
                let b = DualNumber::new(x2, s2);
                (a.ln().unwrap() + a * b - b.sin() + (a.exp() / b.cos().exp()).unwrap())
                    .into_parts()
            };
            let reference = {
                let a = Dual64::new(x1, s1);
                let b = Dual64::new(x2, s2);
                a.ln() + a * b - b.sin() + a.exp() / b.cos().exp()
            };
            assert_relative_eq!(ours.0, reference.re, max_relative = 1e-12);
            assert_relative_eq!(ours.1, reference.eps, max_relative = 1e-9, epsilon = 1e-9);
        }
    }
}
