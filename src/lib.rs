//! Exact recovery of a threshold-shared secret.
//!
//! Shares arrive as base-N digit strings keyed by their x-coordinate. The
//! secret is the constant term of the degree k-1 polynomial through any k of
//! them, recovered with Lagrange interpolation over exact rationals so that
//! arbitrarily large shares never lose precision.
//!
//! ```
//! use shamir_recover::{reconstruct, Testcase, Threshold};
//!
//! // Shares of y = 3x + 2
//! let testcase = Testcase::new(Threshold { n: 3, k: 2 })
//!     .with_share("1", "10", "5")
//!     .with_share("2", "2", "1000")
//!     .with_share("3", "16", "b");
//!
//! assert_eq!(reconstruct(&testcase).unwrap().to_string(), "2");
//! ```

use num_bigint::BigInt;

pub mod error;
pub mod extract;
pub mod lagrange;
pub mod radix;
pub mod rational;
pub mod testcase;

pub use error::{DocumentError, ReconstructError, ShareError};
pub use extract::{reconstruct, reconstruct_document, Execution, Outcome};
pub use lagrange::{interpolate_at_zero, lagrange_coefficients};
pub use radix::decode;
pub use rational::Rational;
pub use testcase::{Document, EncodedShare, LabeledShare, Testcase, Threshold};

/// A decoded share: the polynomial evaluated at `x` gives `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}
