//! Per-routine drivers: one checked differential invocation per routine.
//!
//! Each driver clones its operand buffers once per family (clones are
//! never shared between routines or families), invokes both families
//! through [`run_captured`] with identical logical parameters, and hands
//! the outcomes to the oracle: faults first, buffers second, returned
//! scalars last. A read-only routine still gets its buffers compared
//! afterwards, so an implementation mutating through an unsafe back door
//! would be caught the same way an in-place routine divergence is.

use crate::isolate::run_captured;
use crate::level1::{DrotmParams, Level1};
use crate::oracle;

pub fn check_dcopy<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
) {
    let (lx, mut ly) = (x.to_vec(), y.to_vec());
    let (rx, mut ry) = (x.to_vec(), y.to_vec());

    let lf = run_captured(|| left.dcopy(n, &lx, inc_x, &mut ly, inc_y)).err();
    let rf = run_captured(|| right.dcopy(n, &rx, inc_x, &mut ry, inc_y)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
}

pub fn check_dswap<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
) {
    let (mut lx, mut ly) = (x.to_vec(), y.to_vec());
    let (mut rx, mut ry) = (x.to_vec(), y.to_vec());

    let lf = run_captured(|| left.dswap(n, &mut lx, inc_x, &mut ly, inc_y)).err();
    let rf = run_captured(|| right.dswap(n, &mut rx, inc_x, &mut ry, inc_y)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
}

pub fn check_dscal<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    alpha: f64,
    x: &[f64],
    inc_x: usize,
) {
    let mut lx = x.to_vec();
    let mut rx = x.to_vec();

    let lf = run_captured(|| left.dscal(n, alpha, &mut lx, inc_x)).err();
    let rf = run_captured(|| right.dscal(n, alpha, &mut rx, inc_x)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
}

pub fn check_daxpy<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    alpha: f64,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
) {
    let (lx, mut ly) = (x.to_vec(), y.to_vec());
    let (rx, mut ry) = (x.to_vec(), y.to_vec());

    let lf = run_captured(|| left.daxpy(n, alpha, &lx, inc_x, &mut ly, inc_y)).err();
    let rf = run_captured(|| right.daxpy(n, alpha, &rx, inc_x, &mut ry, inc_y)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
}

pub fn check_ddot<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
) {
    let (lx, ly) = (x.to_vec(), y.to_vec());
    let (rx, ry) = (x.to_vec(), y.to_vec());

    let l_out = run_captured(|| left.ddot(n, &lx, inc_x, &ly, inc_y));
    let r_out = run_captured(|| right.ddot(n, &rx, inc_x, &ry, inc_y));

    oracle::same_fault(case, l_out.as_ref().err(), r_out.as_ref().err());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
    if let (Ok(l), Ok(r)) = (l_out, r_out) {
        oracle::same_f64_approx(case, l, r, oracle::ABS_TOL, oracle::REL_TOL);
    }
}

pub fn check_dnrm2<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
) {
    let lx = x.to_vec();
    let rx = x.to_vec();

    let l_out = run_captured(|| left.dnrm2(n, &lx, inc_x));
    let r_out = run_captured(|| right.dnrm2(n, &rx, inc_x));

    oracle::same_fault(case, l_out.as_ref().err(), r_out.as_ref().err());
    oracle::same_f64s(case, &lx, &rx);
    if let (Ok(l), Ok(r)) = (l_out, r_out) {
        oracle::same_f64_approx(case, l, r, oracle::ABS_TOL, oracle::REL_TOL);
    }
}

pub fn check_dasum<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
) {
    let lx = x.to_vec();
    let rx = x.to_vec();

    let l_out = run_captured(|| left.dasum(n, &lx, inc_x));
    let r_out = run_captured(|| right.dasum(n, &rx, inc_x));

    oracle::same_fault(case, l_out.as_ref().err(), r_out.as_ref().err());
    oracle::same_f64s(case, &lx, &rx);
    if let (Ok(l), Ok(r)) = (l_out, r_out) {
        oracle::same_f64_approx(case, l, r, oracle::ABS_TOL, oracle::REL_TOL);
    }
}

/// Known limitation: when x contains NaN the index of maximum absolute
/// value is implementation-defined, so the index comparison is skipped.
/// Fault and buffer comparisons still run.
pub fn check_idamax<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
) {
    let lx = x.to_vec();
    let rx = x.to_vec();

    let l_out = run_captured(|| left.idamax(n, &lx, inc_x));
    let r_out = run_captured(|| right.idamax(n, &rx, inc_x));

    oracle::same_fault(case, l_out.as_ref().err(), r_out.as_ref().err());
    oracle::same_f64s(case, &lx, &rx);
    if let (Ok(l), Ok(r)) = (l_out, r_out)
        && !oracle::has_nan(x)
    {
        oracle::same_index(case, l, r);
    }
}

pub fn check_drot<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
    c: f64,
    s: f64,
) {
    let (mut lx, mut ly) = (x.to_vec(), y.to_vec());
    let (mut rx, mut ry) = (x.to_vec(), y.to_vec());

    let lf = run_captured(|| left.drot(n, &mut lx, inc_x, &mut ly, inc_y, c, s)).err();
    let rf = run_captured(|| right.drot(n, &mut rx, inc_x, &mut ry, inc_y, c, s)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
}

pub fn check_drotm<L: Level1, R: Level1>(
    case: &str,
    left: &L,
    right: &R,
    n: usize,
    x: &[f64],
    inc_x: usize,
    y: &[f64],
    inc_y: usize,
    param: &DrotmParams,
) {
    let (mut lx, mut ly) = (x.to_vec(), y.to_vec());
    let (mut rx, mut ry) = (x.to_vec(), y.to_vec());

    let lf = run_captured(|| left.drotm(n, &mut lx, inc_x, &mut ly, inc_y, param)).err();
    let rf = run_captured(|| right.drotm(n, &mut rx, inc_x, &mut ry, inc_y, param)).err();

    oracle::same_fault(case, lf.as_ref(), rf.as_ref());
    oracle::same_f64s(case, &lx, &rx);
    oracle::same_f64s(case, &ly, &ry);
}
