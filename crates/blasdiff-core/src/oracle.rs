//! Equivalence oracle: assert two invocation outcomes are observably equal.
//!
//! Every check panics with a diagnostic embedding the case description on
//! the first mismatch; that panic propagating out of the fuzz entry point
//! is how a divergence reaches the external engine. Discrete values are
//! compared exactly, floating-point scalars within a combined
//! absolute/relative tolerance, and NaN-vs-NaN counts as equivalent since
//! NaN carries no comparable payload. The oracle never mutates anything
//! it is given to compare.

use crate::isolate::Fault;

/// Default absolute tolerance for approximate scalar comparisons.
pub const ABS_TOL: f64 = 1e-13;
/// Default relative tolerance for approximate scalar comparisons.
pub const REL_TOL: f64 = 1e-13;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True when `|a - b| <= abs_tol` or `|a - b| / max(|a|, |b|) <= rel_tol`,
/// or the two values are identical (covers equal infinities).
///
/// The relative branch divides rather than multiplying the tolerance out:
/// an infinite delta then yields `NaN <= rel_tol` (false), so an infinity
/// disagreeing with anything is never judged equivalent.
pub fn equal_within_abs_or_rel(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    let delta = (a - b).abs();
    delta <= abs_tol || delta / a.abs().max(b.abs()) <= rel_tol
}

/// True when the slice contains at least one NaN.
pub fn has_nan(x: &[f64]) -> bool {
    x.iter().any(|v| v.is_nan())
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

/// Assert both sides faulted identically or neither faulted.
pub fn same_fault(case: &str, left: Option<&Fault>, right: Option<&Fault>) {
    match (left, right) {
        (None, None) => {}
        (Some(l), None) => {
            panic!("{case}: left family faults, right does not: {l}")
        }
        (None, Some(r)) => {
            panic!("{case}: right family faults, left does not: {r}")
        }
        (Some(l), Some(r)) => {
            if l != r {
                panic!("{case}: fault mismatch.\nleft:  {l}\nright: {r}");
            }
        }
    }
}

/// Assert two operand buffers match element-for-element after invocation.
/// Order- and length-sensitive; NaN at the same position counts as same.
pub fn same_f64s(case: &str, left: &[f64], right: &[f64]) {
    let same = left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(&l, &r)| l == r || (l.is_nan() && r.is_nan()));
    if !same {
        panic!("{case}: buffer mismatch.\nleft:  {left:?}\nright: {right:?}");
    }
}

/// Assert two returned indices are exactly equal.
pub fn same_index(case: &str, left: Option<usize>, right: Option<usize>) {
    if left != right {
        panic!("{case}: index mismatch. left = {left:?}, right = {right:?}");
    }
}

/// Assert two returned scalars agree within tolerance. Both-NaN is
/// equivalent; exactly one NaN is a mismatch.
pub fn same_f64_approx(case: &str, left: f64, right: f64, abs_tol: f64, rel_tol: f64) {
    if left.is_nan() && right.is_nan() {
        return;
    }
    if !equal_within_abs_or_rel(left, right, abs_tol, rel_tol) {
        panic!(
            "{case}: scalar mismatch. left = {left:e} ({:#018x}), right = {right:e} ({:#018x}), \
             abs_tol = {abs_tol:e}, rel_tol = {rel_tol:e}",
            left.to_bits(),
            right.to_bits(),
        );
    }
}

/// Assert two float slices agree element-wise within tolerance.
pub fn same_f64s_approx(case: &str, left: &[f64], right: &[f64], abs_tol: f64, rel_tol: f64) {
    if left.len() != right.len() {
        panic!(
            "{case}: length mismatch. left = {}, right = {}",
            left.len(),
            right.len()
        );
    }
    for (&l, &r) in left.iter().zip(right) {
        same_f64_approx(case, l, r, abs_tol, rel_tol);
    }
}
