//! Numeric helpers shared by training and prediction.

use std::cmp::Ordering;

/// Dot product of a binary vector and a real-valued weight row.
///
/// Returns `0.0` when the lengths differ instead of failing, so a pattern of
/// the wrong width activates every cluster equally (with zero).
#[inline]
pub fn dot(x: &[u8], w: &[f64]) -> f64 {
    if x.len() != w.len() {
        return 0.0;
    }
    x.iter().zip(w).map(|(&xi, &wi)| xi as f64 * wi).sum()
}

/// Sum of all elements of a binary vector.
#[inline]
pub fn vector_sum(x: &[u8]) -> f64 {
    x.iter().map(|&xi| xi as f64).sum()
}

/// Indices of `values` ordered from highest to lowest.
///
/// The sort is stable: equal values keep ascending index order. NaN compares
/// equal to everything.
pub fn rank_descending(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal));
    order
}

/// Exact structural and value equality of two row-major matrices.
pub fn matrices_equal<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    a.len() == b.len()
        && a.iter().zip(b).all(|(ra, rb)| {
            let (ra, rb) = (ra.as_ref(), rb.as_ref());
            ra.len() == rb.len() && ra.iter().zip(rb).all(|(x, y)| x == y)
        })
}
