// Matrix contract tests: the 1-based addressing rules and the row-major
// storage contract, checked on fixed cases and on randomized shapes.

use super::*;

/// Row-major offset: from_vec data lands at (row, col) = data[(row-1)*cols + (col-1)]
#[test]
fn contract_row_major_layout() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.get(1, 1).expect("in range"), 1);
    assert_eq!(m.get(1, 3).expect("in range"), 3);
    assert_eq!(m.get(2, 1).expect("in range"), 4);
    assert_eq!(m.get(2, 3).expect("in range"), 6);
}

/// Nested and flat construction agree
#[test]
fn contract_from_rows_matches_from_vec() {
    let nested = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])
        .expect("rows have equal length");
    let flat = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(nested, flat);
}

/// Rendering emits exactly one newline-terminated line per row
#[test]
fn contract_display_line_per_row() {
    let m = Matrix::<i32>::zeros(3, 2).expect("3x2 is a valid shape");
    let rendered = m.to_string();
    assert!(rendered.ends_with('\n'));
    assert_eq!(rendered.lines().count(), 3);
    for line in rendered.lines() {
        assert_eq!(line.split_whitespace().count(), 2);
    }
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    /// Every in-range 1-based (row, col) is addressable and set/get round-trips
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_set_get_in_range(
            rows in 1..=6usize,
            cols in 1..=6usize,
            value in -1000..1000i32,
        ) {
            let mut m = Matrix::<i32>::zeros(rows, cols).expect("valid shape");
            for row in 1..=rows {
                for col in 1..=cols {
                    m.set(row, col, value).expect("in range");
                    prop_assert_eq!(m.get(row, col).expect("in range"), value);
                }
            }
        }
    }

    /// Index 0 and index > dimension fail on both axes, nothing else does
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_bounds_symmetric(
            rows in 1..=6usize,
            cols in 1..=6usize,
            row in 0..=8usize,
            col in 0..=8usize,
        ) {
            let m = Matrix::<i32>::zeros(rows, cols).expect("valid shape");
            let in_range = (1..=rows).contains(&row) && (1..=cols).contains(&col);
            prop_assert_eq!(
                m.get(row, col).is_ok(),
                in_range,
                "get({}, {}) on a {}x{} matrix",
                row, col, rows, cols
            );
        }
    }
}
