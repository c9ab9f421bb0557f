use crate::prelude::{MatrixError, MatrixResult, OverflowKind};

/// Reverse-division and sign-consistency guards for `f64` products.
///
/// These are magnitude heuristics for values that stand in for integral or
/// bounded quantities: a product must reproduce each non-zero factor when
/// divided by the other, and a running sum must not move against the sign of
/// the term just added. They do not flag benign rounding.
pub struct OverflowHelper;

impl OverflowHelper {
    /// Multiplies two elements, rejecting products that cannot reproduce
    /// their factors through division.
    #[allow(clippy::float_cmp)]
    pub fn checked_product(lhs: f64, rhs: f64) -> MatrixResult<f64> {
        let product = lhs * rhs;
        if (lhs != 0.0 && product / lhs != rhs) || (rhs != 0.0 && product / rhs != lhs) {
            return Err(MatrixError::ArithmeticOverflow(OverflowKind::ElementProduct));
        }
        Ok(product)
    }

    /// Adds a term to a running sum, rejecting updates whose direction
    /// contradicts the term's sign.
    pub fn checked_sum(sum: f64, term: f64) -> MatrixResult<f64> {
        let updated = sum + term;
        if (term > 0.0 && updated < sum) || (term < 0.0 && updated > sum) {
            return Err(MatrixError::ArithmeticOverflow(OverflowKind::Accumulation));
        }
        Ok(updated)
    }
}
