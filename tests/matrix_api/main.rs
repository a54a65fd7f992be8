use morpheus::{Float, Matrix, MatrixError};

// The in-place operations replace the data; the compute_* ones don't.
#[test]
fn compute_never_mutates() -> Result<(), MatrixError> {
    let data = vec![vec![1., 2., 3.], vec![3., 2., 1.]];
    let a = Matrix::from_rows(data.clone())?;
    let b = Matrix::from_rows(vec![vec![4., 5., 6.], vec![5., 7., 3.]])?;
    let column = Matrix::from_rows(vec![vec![1.], vec![1.], vec![1.]])?;

    let _ = a.compute_add(&b)?;
    let _ = a.compute_subtract(&b)?;
    let _ = a.compute_multiply(&column)?;
    let _ = a.compute_scalar_multiply(3.);
    let _ = a.compute_scalar_divide(3.)?;
    let _ = a.elementwise(&b, |x, y| x * y)?;
    let _ = a.map_elements(|x| -x);

    assert_eq!(a.data(), data);
    assert_eq!(b.data(), vec![vec![4., 5., 6.], vec![5., 7., 3.]]);
    Ok(())
}

#[test]
fn apply_replaces_data() -> Result<(), MatrixError> {
    let mut a = Matrix::from_rows(vec![vec![1., 2., 3.], vec![3., 2., 1.]])?;
    let b = Matrix::from_rows(vec![vec![4., 5., 6.], vec![5., 7., 3.]])?;
    let expected = a.compute_add(&b)?;

    a.add(&b)?;
    assert_eq!(a, expected);

    let column = Matrix::from_rows(vec![vec![1.], vec![1.], vec![1.]])?;
    a.multiply(&column)?;
    assert_eq!(a.data(), vec![vec![21.], vec![21.]]);
    assert_eq!(a.size(), (2, 1));
    Ok(())
}

#[test]
fn errors_leave_receiver_intact() -> Result<(), MatrixError> {
    let data = vec![vec![1., 2.], vec![3., 4.]];
    let mut a = Matrix::from_rows(data.clone())?;
    let row = Matrix::from_rows(vec![vec![1., 2., 3.]])?;

    assert!(matches!(a.add(&row), Err(MatrixError::SizeMismatch { .. })));
    assert!(matches!(
        a.subtract(&row),
        Err(MatrixError::SizeMismatch { .. })
    ));
    assert!(matches!(
        a.multiply(&row),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert_eq!(a.scalar_divide(0.).err(), Some(MatrixError::DivisionByZero));
    assert_eq!(
        a.set_data(vec![vec![1.], vec![1., 2.]]).err(),
        Some(MatrixError::InvalidStructure)
    );
    assert!(matches!(
        a.get(2, 0),
        Err(MatrixError::ElementNotFound { row: 2, column: 0 })
    ));

    assert_eq!(a.data(), data);
    assert_eq!(a.size(), (2, 2));
    Ok(())
}

#[test]
fn transpose_is_involutive() -> Result<(), MatrixError> {
    let shapes = [(1, 1), (1, 5), (5, 1), (3, 4), (4, 3)];
    for (nrows, ncols) in shapes {
        let data: Vec<Float> = (0..nrows * ncols).map(|i| i as Float).collect();
        let original = Matrix::from_data(nrows, ncols, data)?;

        let mut m = original.clone();
        m.transpose();
        assert_eq!(m.size(), (ncols, nrows));
        for row in 0..nrows {
            for col in 0..ncols {
                assert_eq!(m.get(col, row)?, original.get(row, col)?);
            }
        }

        m.transpose();
        assert_eq!(m, original);
    }
    Ok(())
}

#[test]
fn product_accumulates_in_order() -> Result<(), MatrixError> {
    // 1e16 + 1 - 1e16 is 0 in f64, but 1e16 - 1e16 + 1 is 1.
    let mut a = Matrix::from_rows(vec![vec![1e16, 1., -1e16]])?;
    let b = Matrix::from_rows(vec![vec![1.], vec![1.], vec![1.]])?;
    let expected: Float = 1e16 + 1. - 1e16;
    a.multiply(&b)?;
    assert_eq!(a.get(0, 0)?, expected);
    Ok(())
}

#[test]
fn serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let m = Matrix::from_rows(vec![vec![1.5, 2.], vec![3., 4.]])?;
    let json = serde_json::to_string(&m)?;
    let back: Matrix = serde_json::from_str(&json)?;
    assert_eq!(back, m);

    let ragged: Result<Matrix, _> = serde_json::from_str("[[1.0],[2.0,3.0]]");
    assert!(ragged.is_err());
    Ok(())
}
