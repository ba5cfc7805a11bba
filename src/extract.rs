//! Secret extraction: decode shares, interpolate, validate.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{ReconstructError, Result, ShareError};
use crate::lagrange::interpolate_at_zero;
use crate::radix::decode;
use crate::testcase::{Document, LabeledShare, Testcase};
use crate::Point;

/// How independent testcases of a document are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

/// The result of reconstructing one named testcase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub secret: Result<BigUint, ReconstructError>,
}

// Optional sign followed by decimal digits only; BigInt::from_str alone also takes `_`
fn parse_label(label: &str) -> Result<BigInt> {
    let digits = label.strip_prefix(['+', '-']).unwrap_or(label);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShareError::InvalidShareLabel(label.to_string()));
    }
    BigInt::from_str(label).map_err(|_| ShareError::InvalidShareLabel(label.to_string()))
}

fn decode_share(entry: &LabeledShare) -> Result<Point> {
    let x = parse_label(&entry.label)?;
    let base = entry
        .share
        .base
        .trim()
        .parse::<u32>()
        .map_err(|_| ShareError::InvalidBase(entry.share.base.clone()))?;
    let y = decode(&entry.share.value, base)?;

    Ok(Point::new(x, BigInt::from(y)))
}

fn extract_secret(testcase: &Testcase) -> Result<BigUint> {
    let n = testcase.threshold.n;
    let k = testcase.threshold.k;

    let points = testcase
        .shares
        .iter()
        .map(decode_share)
        .collect::<Result<Vec<_>>>()?;

    if points.len() != n {
        return Err(ShareError::ShareCountMismatch {
            expected: n,
            found: points.len(),
        });
    }
    if k == 0 || k > n {
        return Err(ShareError::InvalidThreshold { n, k });
    }

    // First k in insertion order; no consistency check across other subsets
    let selected = &points[..k];
    debug!(
        n,
        k,
        xs = ?selected.iter().map(|p| p.x.to_string()).collect::<Vec<_>>(),
        "interpolating selected shares"
    );

    let candidate = interpolate_at_zero(selected)?;
    if !candidate.is_integer() {
        return Err(ShareError::NonIntegerSecret);
    }
    let secret = candidate.to_integer()?;

    match secret.into_parts() {
        (Sign::Minus, _) => Err(ShareError::NegativeSecret),
        (_, magnitude) => Ok(magnitude),
    }
}

/// Reconstruct the secret held by `testcase`.
///
/// Decodes every share, checks that exactly `n` are present, interpolates
/// the first `k` at x = 0 and requires the result to be a non-negative
/// integer. Any failure is reported as `Interpolation failed: <cause>`.
pub fn reconstruct(testcase: &Testcase) -> Result<BigUint, ReconstructError> {
    let secret = extract_secret(testcase)?;
    debug!(bits = secret.bits(), "secret reconstructed");
    Ok(secret)
}

/// Reconstruct every testcase in `document`, returning outcomes in document order.
pub fn reconstruct_document(document: &Document, execution: Execution) -> Vec<Outcome> {
    let run = |(name, testcase): &(String, Testcase)| Outcome {
        name: name.clone(),
        secret: reconstruct(testcase),
    };

    match execution {
        Execution::Sequential => document.testcases.iter().map(run).collect(),
        Execution::Parallel => document.testcases.par_iter().map(run).collect(),
    }
}
