//! Dense linear algebra helpers for small systems.

/// Pivots below this magnitude mark the system as singular.
pub const SINGULAR_PIVOT: f64 = 1e-12;

/// Solve a linear system Ax = b using Gaussian elimination with partial pivoting.
///
/// Returns `None` when `A` is singular or numerically degenerate, or when the
/// dimensions do not agree.
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n || a.iter().any(|row| row.len() != n) {
        return None;
    }

    // Augmented matrix [A | b]
    let mut aug: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut r = row.clone();
            r.push(rhs);
            r
        })
        .collect();

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for row in (col + 1)..n {
            if aug[row][col].abs() > max_val {
                max_val = aug[row][col].abs();
                max_row = row;
            }
        }

        if max_val.is_nan() || max_val < SINGULAR_PIVOT {
            return None;
        }

        aug.swap(col, max_row);

        for row in (col + 1)..n {
            let factor = aug[row][col] / aug[col][col];
            for j in col..=n {
                aug[row][j] -= factor * aug[col][j];
            }
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = aug[i][n];
        for j in (i + 1)..n {
            sum -= aug[i][j] * x[j];
        }
        x[i] = sum / aug[i][i];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}

/// Build the k×k symmetric Toeplitz matrix `R[i][j] = first_row[|i - j|]`.
///
/// `first_row` must hold at least `k` values.
pub fn toeplitz(first_row: &[f64], k: usize) -> Vec<Vec<f64>> {
    (0..k)
        .map(|i| (0..k).map(|j| first_row[i.abs_diff(j)]).collect())
        .collect()
}
