// Vector contract tests: algebraic properties that must hold for every
// valid operand, checked on fixed cases and on randomized inputs.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)

use super::*;

/// Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn contract_dot_commutative() {
    let u = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).expect("non-empty literal");
    let v = Vector::from_slice(&[4.0_f64, 5.0, 6.0]).expect("non-empty literal");

    let uv = u.dot(&v).expect("dimensions match");
    let vu = v.dot(&u).expect("dimensions match");

    assert!((uv - vu).abs() < 1e-6, "dot(u,v)={uv} != dot(v,u)={vu}");
}

/// Norm is non-negative and matches the 3-4-5 triangle
#[test]
fn contract_norm_nonneg() {
    let v = Vector::from_slice(&[-3.0_f64, 4.0]).expect("non-empty literal");
    let n = v.norm();

    assert!(n >= 0.0, "norm={n}, expected >= 0.0");
    assert!((n - 5.0).abs() < 1e-9, "norm of [-3,4]={n}, expected 5.0");
}

/// Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn contract_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0_f64, -2.0, 3.0, 0.5]).expect("non-empty literal");
    let v = Vector::from_slice(&[4.0_f64, 0.0, -1.0, 2.0]).expect("non-empty literal");

    let dot = u.dot(&v).expect("dimensions match").abs();
    let bound = u.norm() * v.norm();

    assert!(dot <= bound + 1e-9, "|dot|={dot} > norm(u)*norm(v)={bound}");
}

/// Cross product output is orthogonal to both operands
#[test]
fn contract_cross_orthogonal() {
    let a = Vector::from_slice(&[1.0_f64, -3.0, 5.0]).expect("non-empty literal");
    let b = Vector::from_slice(&[-2.0_f64, 4.0, -6.0]).expect("non-empty literal");
    let c = a.cross(&b).expect("both operands are 3-dimensional");

    assert!(c.dot(&a).expect("dimensions match").abs() < 1e-9);
    assert!(c.dot(&b).expect("dimensions match").abs() < 1e-9);
}

mod vector_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    fn vec3() -> impl Strategy<Value = Vector<f64>> {
        proptest::collection::vec(-100.0_f64..100.0, 3)
            .prop_map(|data| Vector::from_vec(data).expect("length 3 literal"))
    }

    /// Cross product anti-commutativity: a x b == -(b x a), componentwise
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn contract_prop_cross_anticommutative(a in vec3(), b in vec3()) {
            let ab = a.cross(&b).expect("both operands are 3-dimensional");
            let ba = b.cross(&a).expect("both operands are 3-dimensional");

            for idx in 1..=3 {
                let lhs = ab.get(idx).expect("in range");
                let rhs = -ba.get(idx).expect("in range");
                prop_assert!(
                    (lhs - rhs).abs() < 1e-9,
                    "(a x b)[{}]={} != -(b x a)[{}]={}",
                    idx, lhs, idx, rhs
                );
            }
        }
    }

    /// Normalize yields unit norm for any non-zero vector
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn contract_prop_normalize_unit_norm(
            data in proptest::collection::vec(-100.0_f64..100.0, 1..8),
        ) {
            prop_assume!(data.iter().any(|x| x.abs() > 1e-6));
            let v = Vector::from_vec(data).expect("non-empty literal");
            let unit = v.normalize().expect("non-zero vector");

            prop_assert!(
                (unit.norm() - 1.0).abs() < 1e-9,
                "normalize(v).norm()={}, expected 1.0",
                unit.norm()
            );
        }
    }

    /// Subtracting what was added restores the original vector
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn contract_prop_add_sub_roundtrip(
            n in 1..8usize,
            seed in 0..500u32,
        ) {
            let a: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let b: Vec<f64> = (0..n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.91).cos() * 10.0)
                .collect();
            let a = Vector::from_vec(a).expect("non-empty literal");
            let b = Vector::from_vec(b).expect("non-empty literal");

            let roundtrip = a
                .add(&b)
                .expect("dimensions match")
                .sub(&b)
                .expect("dimensions match");
            for idx in 1..=n {
                prop_assert!(
                    (roundtrip.get(idx).expect("in range") - a.get(idx).expect("in range")).abs()
                        < 1e-9,
                    "((a+b)-b)[{}] != a[{}]",
                    idx, idx
                );
            }
        }
    }
}
