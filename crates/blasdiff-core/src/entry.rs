//! Generic fuzz pipelines: decode one buffer, exercise every driver.
//!
//! These are generic over the two families so the harness crate (and the
//! tests here) can wire any pair of [`Level1`] implementations. One call
//! is one fuzz iteration: a decode failure rejects the iteration with no
//! side effects; a divergence panics out through the caller.

use crate::driver::*;
use crate::level1::{DrotmParams, Level1, RotmFlag};
use crate::params::{decode_mixed, decode_one_vector, decode_two_vector};

/// Outcome of one fuzz iteration, consumed by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzStatus {
    /// Malformed or too-short input; nothing was invoked.
    Reject,
    /// The input was decoded and every driver ran the oracle.
    Accept,
}

impl FuzzStatus {
    /// Engine-facing status code: zero or negative rejects, positive accepts.
    pub fn code(self) -> i32 {
        match self {
            FuzzStatus::Reject => 0,
            FuzzStatus::Accept => 1,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == FuzzStatus::Accept
    }
}

/// Single-vector pipeline: idamax, dnrm2, dasum, dscal.
pub fn run_one_vector<L: Level1, R: Level1>(data: &[u8], left: &L, right: &R) -> FuzzStatus {
    let Ok(p) = decode_one_vector(data) else {
        return FuzzStatus::Reject;
    };

    let case = format!(
        "case: n = {}, inc_x = {}, x = {:?}, alpha = {}",
        p.n, p.x.inc, p.x.data, p.alpha
    );

    check_idamax(&case, left, right, p.n, &p.x.data, p.x.inc);
    check_dnrm2(&case, left, right, p.n, &p.x.data, p.x.inc);
    check_dasum(&case, left, right, p.n, &p.x.data, p.x.inc);
    check_dscal(&case, left, right, p.n, p.alpha, &p.x.data, p.x.inc);

    FuzzStatus::Accept
}

/// Two-vector pipeline: daxpy, dcopy, ddot, dswap, drot.
pub fn run_two_vector<L: Level1, R: Level1>(data: &[u8], left: &L, right: &R) -> FuzzStatus {
    let Ok(p) = decode_two_vector(data) else {
        return FuzzStatus::Reject;
    };

    let case = format!(
        "case: n = {}, inc_x = {}, x = {:?}, inc_y = {}, y = {:?}, alpha = {}, beta = {}",
        p.n, p.x.inc, p.x.data, p.y.inc, p.y.data, p.alpha, p.beta
    );

    check_daxpy(&case, left, right, p.n, p.alpha, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_dcopy(&case, left, right, p.n, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_ddot(&case, left, right, p.n, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_dswap(&case, left, right, p.n, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_drot(
        &case, left, right, p.n, &p.x.data, p.x.inc, &p.y.data, p.y.inc, p.alpha, p.beta,
    );

    FuzzStatus::Accept
}

/// Combined pipeline over every level-1 routine.
///
/// The selector byte is consumed but not branched on. The logical element
/// count is derived from the decoded buffers: the full x length for
/// single-vector routines, the shorter of the two lengths for two-vector
/// routines. Matrix operands are decoded for alignment only.
pub fn run_mixed<L: Level1, R: Level1>(data: &[u8], left: &L, right: &R) -> FuzzStatus {
    let Ok(p) = decode_mixed(data) else {
        return FuzzStatus::Reject;
    };

    let n_x = p.x.data.len();
    let n_xy = p.x.data.len().min(p.y.data.len());
    let alpha = p.scalars[0];
    let beta = p.scalars[1];
    let rotm = DrotmParams {
        flag: RotmFlag::from_aux(p.aux),
        h: [p.scalars[0], p.scalars[1], p.scalars[2], p.scalars[3]],
    };

    let case_x = format!(
        "case: n = {n_x}, inc_x = {}, x = {:?}, alpha = {alpha}",
        p.x.inc, p.x.data
    );
    let case_xy = format!(
        "case: n = {n_xy}, inc_x = {}, x = {:?}, inc_y = {}, y = {:?}, alpha = {alpha}, \
         beta = {beta}",
        p.x.inc, p.x.data, p.y.inc, p.y.data
    );
    let case_rotm = format!(
        "case: n = {n_xy}, inc_x = {}, x = {:?}, inc_y = {}, y = {:?}, rotm = {rotm:?}",
        p.x.inc, p.x.data, p.y.inc, p.y.data
    );

    check_drot(
        &case_xy, left, right, n_xy, &p.x.data, p.x.inc, &p.y.data, p.y.inc, alpha, beta,
    );
    check_drotm(
        &case_rotm, left, right, n_xy, &p.x.data, p.x.inc, &p.y.data, p.y.inc, &rotm,
    );
    check_dswap(&case_xy, left, right, n_xy, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_dscal(&case_x, left, right, n_x, alpha, &p.x.data, p.x.inc);
    check_dcopy(&case_xy, left, right, n_xy, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_daxpy(
        &case_xy, left, right, n_xy, alpha, &p.x.data, p.x.inc, &p.y.data, p.y.inc,
    );
    check_ddot(&case_xy, left, right, n_xy, &p.x.data, p.x.inc, &p.y.data, p.y.inc);
    check_dnrm2(&case_x, left, right, n_x, &p.x.data, p.x.inc);
    check_dasum(&case_x, left, right, n_x, &p.x.data, p.x.inc);
    check_idamax(&case_x, left, right, n_x, &p.x.data, p.x.inc);

    FuzzStatus::Accept
}
