//! Algebraic properties of vector arithmetic on random inputs.
//!
//! Each test draws random vectors with `rand` and checks an identity (round-trip, commutativity,
//! scalar associativity, anti-commutativity of the cross product) within a floating-point
//! tolerance using `approx`.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nvec::Vector;
use rand::Rng;

const TRIALS: usize = 50;

/// Random vector of dimension `n` with components in [-10, 10).
fn random_vector(rng: &mut impl Rng, n: usize) -> Vector {
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn assert_close(a: &Vector, b: &Vector, eps: f64) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = eps);
    }
}

/// Test that `(a + b) - b` recovers `a` within floating-point tolerance.
#[test]
fn add_then_sub_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..8);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        assert_close(&a.add(&b).sub(&b), &a, 1e-12);
    }
}

/// Test that `a + b == b + a` for random vectors of equal dimension.
#[test]
fn add_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..8);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        assert_eq!(a.add(&b), b.add(&a));
    }
}

/// Test that scaling by `k` then `m` matches scaling once by `k * m`.
#[test]
fn scalar_multiplication_composes() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..8);
        let a = random_vector(&mut rng, n);
        let k: f64 = rng.gen_range(-5.0..5.0);
        let m: f64 = rng.gen_range(-5.0..5.0);
        assert_close(&a.mul_scalar(k).mul_scalar(m), &a.mul_scalar(k * m), 1e-11);
    }
}

/// Test that `a . b == b . a` for random vectors of equal dimension.
#[test]
fn dot_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..8);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

/// Test that `a x b == -(b x a)` and that the cross product is orthogonal to both inputs.
#[test]
fn cross_is_anticommutative_and_orthogonal() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let c = a.cross(&b);
        assert_close(&c, &b.cross(&a).mul_scalar(-1.0), 1e-12);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-9);
    }
}

/// Test that the norm of a zero vector is zero for every dimension up to 15, including the empty vector.
#[test]
fn norm_of_zero_vector_is_zero() {
    for n in 0..16 {
        let z: Vector = Vector::zeros(n);
        assert_eq!(z.norm(), 0.0);
    }
}

/// Test that `|a|^2` matches `a . a`.
#[test]
fn norm_squared_is_self_dot() {
    let mut rng = rand::thread_rng();
    for _ in 0..TRIALS {
        let n = rng.gen_range(1..8);
        let a = random_vector(&mut rng, n);
        assert_relative_eq!(a.norm() * a.norm(), a.dot(&a), max_relative = 1e-12);
    }
}

/// Test that one pair of vectors can be read from several threads at once without locking.
#[test]
fn vectors_are_shareable_across_threads() {
    let a = Vector::from(vec![1.0, 2.0, 3.0]);
    let b = Vector::from(vec![3.0, 4.0, 5.0]);
    std::thread::scope(|s| {
        let h1 = s.spawn(|| a.dot(&b));
        let h2 = s.spawn(|| a.cross(&b));
        assert_eq!(h1.join().unwrap(), 26.0);
        assert_eq!(h2.join().unwrap(), Vector::from(vec![-2.0, 4.0, -2.0]));
    });
}
