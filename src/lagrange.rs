use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{Result, ShareError};
use crate::rational::Rational;
use crate::Point;

// Pairwise scan in ascending (i, j) order; reports the first repeated x.
fn ensure_distinct(x_coords: &[BigInt]) -> Result<()> {
    for i in 0..x_coords.len() {
        for j in (i + 1)..x_coords.len() {
            if x_coords[i] == x_coords[j] {
                return Err(ShareError::DuplicateX(x_coords[i].clone()));
            }
        }
    }
    Ok(())
}

// Compute exact Lagrange coefficients for interpolation at x=0
// Given the x-coordinates of the participating shares, returns L_i(0) for each
pub fn lagrange_coefficients(x_coords: &[BigInt]) -> Result<Vec<Rational>> {
    ensure_distinct(x_coords)?;

    let k = x_coords.len();
    let mut coefficients = Vec::with_capacity(k);

    for i in 0..k {
        let x_i = &x_coords[i];

        // L_i(0) = ∏(j≠i) (0 - x_j) / (x_i - x_j)
        // The empty product is 1, so a single share gets coefficient 1
        let mut basis = Rational::one();
        for (j, x_j) in x_coords.iter().enumerate() {
            if i == j {
                continue;
            }
            let factor = Rational::new(-x_j, x_i - x_j)?;
            basis = &basis * &factor;
        }

        trace!(x = %x_i, basis = %basis, "lagrange basis at zero");
        coefficients.push(basis);
    }

    Ok(coefficients)
}

/// Evaluate the unique polynomial of degree < k through `points` at x = 0.
///
/// Computes `f(0) = Σ y_i · L_i(0)` exactly over the rationals. Fails with
/// [`ShareError::DuplicateX`] before any arithmetic if two points share an x.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Rational> {
    let x_coords: Vec<BigInt> = points.iter().map(|p| p.x.clone()).collect();
    let coefficients = lagrange_coefficients(&x_coords)?;

    let mut result = Rational::zero();
    for (point, basis) in points.iter().zip(&coefficients) {
        let term = &Rational::from_integer(point.y.clone()) * basis;
        result = &result + &term;
    }

    Ok(result)
}
