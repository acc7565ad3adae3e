pub(crate) use super::*;

#[test]
fn test_zeros() {
    let v = Vector::<f32>::zeros(3).expect("3 is a valid dimension");
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    for idx in 1..=3 {
        assert_eq!(v.get(idx).expect("in range"), 0.0);
    }
}

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1, 2, 3, 4]).expect("non-empty literal");
    assert_eq!(v.len(), 4);
    assert_eq!(v.get(1).expect("in range"), 1);
    assert_eq!(v.get(2).expect("in range"), 2);
    assert_eq!(v.get(3).expect("in range"), 3);
    assert_eq!(v.get(4).expect("in range"), 4);
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(
        Vector::<i32>::zeros(0).unwrap_err(),
        MatrizError::InvalidDimensions {
            what: "vector dimension must be > 0"
        }
    );
    assert!(Vector::<i32>::from_slice(&[]).is_err());
    assert!(Vector::<i32>::from_vec(vec![]).is_err());
}

#[test]
fn test_clone_is_deep() {
    let v = Vector::from_slice(&[1, 2, 3, 4]).expect("non-empty literal");
    let mut copy = v.clone();
    copy.set(2, 11).expect("in range");
    assert_eq!(copy.get(2).expect("in range"), 11);
    assert_eq!(v.get(2).expect("in range"), 2);

    // converse direction after assignment
    let mut original = Vector::from_slice(&[5, 6]).expect("non-empty literal");
    let assigned = original.clone();
    original.set(1, 50).expect("in range");
    assert_eq!(assigned.get(1).expect("in range"), 5);
}

#[test]
fn test_assignment_replaces_dimension_and_buffer() {
    let v1 = Vector::from_slice(&[1, 2]).expect("non-empty literal");
    let mut v2 = Vector::from_slice(&[3, 4, 5]).expect("non-empty literal");
    assert_eq!(v2.len(), 3);
    v2 = v1.clone();
    assert_eq!(v2.len(), 2);
    assert_eq!(v2.get(1).expect("in range"), 1);
    assert_eq!(v2.get(2).expect("in range"), 2);
}

#[test]
fn test_get_set_one_based_bounds() {
    let mut v = Vector::<i32>::zeros(4).expect("4 is a valid dimension");
    v.set(4, 4).expect("in range");
    assert_eq!(v.get(4).expect("in range"), 4);

    assert!(v.get(0).is_err());
    assert!(v.get(5).is_err());
    assert!(v.set(0, 5).is_err());
    assert!(v.set(5, 5).is_err());
    assert_eq!(
        v.get(0).unwrap_err(),
        MatrizError::IndexOutOfBounds {
            index: 0,
            bound: 4,
            axis: "element"
        }
    );
}

#[test]
fn test_equality() {
    let v1 = Vector::<i32>::zeros(3).expect("3 is a valid dimension");
    let v2 = Vector::<i32>::zeros(3).expect("3 is a valid dimension");
    let v3 = Vector::<i32>::zeros(2).expect("2 is a valid dimension");
    assert_eq!(v1, v2);
    assert_eq!(v2, v1);
    assert_ne!(v1, v3);

    let v4 = Vector::from_slice(&[1.1_f32, 2.2, 3.3]).expect("non-empty literal");
    let v5 = Vector::from_slice(&[1.1_f32, 2.2, 3.3]).expect("non-empty literal");
    let v6 = Vector::from_slice(&[1.1_f32, 5.5, 3.3]).expect("non-empty literal");
    assert_eq!(v4, v5);
    assert_ne!(v4, v6);
}

#[test]
fn test_add() {
    let v1 = Vector::from_slice(&[1, -2, 3, -4]).expect("non-empty literal");
    let v2 = Vector::from_slice(&[5, 6, 7, 8]).expect("non-empty literal");
    let expected = Vector::from_slice(&[6, 4, 10, 4]).expect("non-empty literal");

    let sum = v1.add(&v2).expect("dimensions match");
    assert_eq!(sum, expected);

    let mut v3 = v1.clone();
    v3.add_assign(&v2).expect("dimensions match");
    assert_eq!(v3, expected);
    // the producing form left its receiver untouched
    assert_eq!(v1.get(1).expect("in range"), 1);
}

#[test]
fn test_add_dimension_mismatch() {
    let mut v1 = Vector::<i32>::zeros(3).expect("3 is a valid dimension");
    let v2 = Vector::from_slice(&[1, 2, 3, 4]).expect("non-empty literal");
    assert_eq!(
        v1.add(&v2).unwrap_err(),
        MatrizError::DimensionMismatch {
            expected: 3,
            actual: 4
        }
    );
    assert!(v1.add_assign(&v2).is_err());
}

#[test]
fn test_sub() {
    let v1 = Vector::from_slice(&[5, 6, 7, 8]).expect("non-empty literal");
    let v2 = Vector::from_slice(&[1, -2, 3, -4]).expect("non-empty literal");
    let expected = Vector::from_slice(&[4, 8, 4, 12]).expect("non-empty literal");

    assert_eq!(v1.sub(&v2).expect("dimensions match"), expected);

    let mut v3 = v1.clone();
    v3.sub_assign(&v2).expect("dimensions match");
    assert_eq!(v3, expected);
}

#[test]
fn test_sub_dimension_mismatch() {
    let mut v1 = Vector::<i32>::zeros(3).expect("3 is a valid dimension");
    let v2 = Vector::from_slice(&[1, 2, 3, 4]).expect("non-empty literal");
    assert!(v1.sub(&v2).is_err());
    assert!(v1.sub_assign(&v2).is_err());
}

#[test]
fn test_scale() {
    let mut v1 = Vector::<i32>::zeros(3).expect("3 is a valid dimension");
    v1 *= 100;
    assert_eq!(v1, Vector::zeros(3).expect("3 is a valid dimension"));

    let v2 = Vector::from_slice(&[3, 5, 7]).expect("non-empty literal");
    let expected = Vector::from_slice(&[9, 15, 21]).expect("non-empty literal");
    assert_eq!(v2.scale(3), expected);
    assert_eq!(v2.clone() * 3, expected);
    // scale() produced a new vector without touching the source
    assert_eq!(v2.get(1).expect("in range"), 3);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[3, 4]).expect("non-empty literal");
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_dot() {
    let v1 = Vector::from_slice(&[1, 3, 5]).expect("non-empty literal");
    let v2 = Vector::from_slice(&[2, 4, 6]).expect("non-empty literal");
    assert_eq!(v1.dot(&v2).expect("dimensions match"), 44);
    assert_eq!(v2.dot(&v1).expect("dimensions match"), 44);

    let v3 = Vector::from_slice(&[1, 2]).expect("non-empty literal");
    assert!(v1.dot(&v3).is_err());
}

#[test]
fn test_angle() {
    let v1 = Vector::from_slice(&[0, 1]).expect("non-empty literal");
    let v2 = Vector::from_slice(&[1, 0]).expect("non-empty literal");
    assert!(v1.angle(&v2).expect("valid operands").cos().abs() < 1e-7);

    let v3 = Vector::from_slice(&[2, 2]).expect("non-empty literal");
    let v4 = Vector::from_slice(&[3, 3]).expect("non-empty literal");
    assert!((v3.angle(&v4).expect("valid operands").cos() - 1.0).abs() < 1e-7);

    let v5 = Vector::from_slice(&[0, -5]).expect("non-empty literal");
    let v6 = Vector::from_slice(&[0, 5]).expect("non-empty literal");
    assert!((v5.angle(&v6).expect("valid operands").cos() + 1.0).abs() < 1e-7);
}

#[test]
fn test_angle_rejects_degenerate_operands() {
    let v1 = Vector::from_slice(&[1, 2]).expect("non-empty literal");
    let zero = Vector::<i32>::zeros(2).expect("2 is a valid dimension");
    assert_eq!(
        v1.angle(&zero).unwrap_err(),
        MatrizError::ZeroLength { op: "angle" }
    );

    let v3 = Vector::from_slice(&[1, 2, 3]).expect("non-empty literal");
    assert_eq!(
        v1.angle(&v3).unwrap_err(),
        MatrizError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_cross_requires_three_dimensions() {
    let mut t1 = Vector::from_slice(&[1, 2]).expect("non-empty literal");
    let t2 = Vector::from_slice(&[3, 4]).expect("non-empty literal");
    assert_eq!(
        t1.cross(&t2).unwrap_err(),
        MatrizError::NotThreeDimensional { lhs: 2, rhs: 2 }
    );

    let t3 = Vector::from_slice(&[3, 4, 5]).expect("non-empty literal");
    assert!(t1.cross(&t3).is_err());
    assert!(t1.cross_assign(&t3).is_err());

    let t4 = Vector::from_slice(&[1, 2, 3, 4]).expect("non-empty literal");
    let t5 = Vector::from_slice(&[3, 4, 5, 6]).expect("non-empty literal");
    assert!(t4.cross(&t5).is_err());
}

#[test]
fn test_cross() {
    let mut v1 = Vector::from_slice(&[1, -3, 5]).expect("non-empty literal");
    let v2 = Vector::from_slice(&[-2, 4, -6]).expect("non-empty literal");
    let expected = Vector::from_slice(&[-2, -4, -2]).expect("non-empty literal");
    v1.cross_assign(&v2).expect("both operands are 3-dimensional");
    assert_eq!(v1, expected);

    let v3 = Vector::from_slice(&[1, 3, 5]).expect("non-empty literal");
    let v4 = Vector::from_slice(&[2, 4, 6]).expect("non-empty literal");
    let expected = Vector::from_slice(&[-2, 4, -2]).expect("non-empty literal");
    assert_eq!(v3.cross(&v4).expect("both operands are 3-dimensional"), expected);
    // the producing form left its receiver untouched
    assert_eq!(v3.get(1).expect("in range"), 1);
}

#[test]
fn test_cross_basis_vectors() {
    let e1 = Vector::from_slice(&[1, 0, 0]).expect("non-empty literal");
    let e2 = Vector::from_slice(&[0, 1, 0]).expect("non-empty literal");
    let e3 = Vector::from_slice(&[0, 0, 1]).expect("non-empty literal");
    assert_eq!(e1.cross(&e2).expect("both operands are 3-dimensional"), e3);

    let expected = Vector::from_slice(&[-1, 0, 0]).expect("non-empty literal");
    assert_eq!(e3.cross(&e2).expect("both operands are 3-dimensional"), expected);
}

#[test]
fn test_normalize() {
    let v = Vector::from_slice(&[1, -3, 5]).expect("non-empty literal");
    let unit = v.normalize().expect("non-zero vector");
    assert!((unit.norm() - 1.0).abs() < 1e-12);
    // source unmodified
    assert_eq!(v.get(3).expect("in range"), 5);

    let v2 = Vector::from_slice(&[3.0_f64, 4.0]).expect("non-empty literal");
    let unit2 = v2.normalize().expect("non-zero vector");
    assert!((unit2.get(1).expect("in range") - 0.6).abs() < 1e-12);
    assert!((unit2.get(2).expect("in range") - 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_zero_vector() {
    let zero = Vector::<f64>::zeros(3).expect("3 is a valid dimension");
    assert_eq!(
        zero.normalize().unwrap_err(),
        MatrizError::ZeroLength { op: "normalize" }
    );
}

#[test]
fn test_display() {
    let v = Vector::from_slice(&[1, 2, 3]).expect("non-empty literal");
    assert_eq!(v.to_string(), "( 1,2,3 )");

    let single = Vector::from_slice(&[7]).expect("non-empty literal");
    assert_eq!(single.to_string(), "( 7 )");

    let negative = Vector::from_slice(&[-1, 2, 3]).expect("non-empty literal");
    assert_eq!(negative.to_string(), "( -1,2,3 )");
}

#[path = "tests_vector_contract.rs"]
mod contract;
