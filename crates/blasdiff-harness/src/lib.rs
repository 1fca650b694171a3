//! Concrete fuzz entry points: the generic pipelines of
//! [`blasdiff_core::entry`] wired to the two in-tree families,
//! [`blasdiff_native::Native`] and [`blasdiff_refblas::RefBlas`].
//!
//! Each function is one fuzz iteration over one opaque byte buffer. A
//! decode failure returns [`FuzzStatus::Reject`] with no side effects; a
//! divergence between the families panics with a diagnostic embedding
//! the decoded parameters, which the external engine records as a crash
//! finding.

pub use blasdiff_core::entry::FuzzStatus;
use blasdiff_core::entry::{run_mixed, run_one_vector, run_two_vector};
use blasdiff_native::Native;
use blasdiff_refblas::RefBlas;

/// Single-vector target: idamax, dnrm2, dasum, dscal.
pub fn fuzz_one_vector(data: &[u8]) -> FuzzStatus {
    run_one_vector(data, &Native, &RefBlas)
}

/// Two-vector target: daxpy, dcopy, ddot, dswap, drot.
pub fn fuzz_two_vector(data: &[u8]) -> FuzzStatus {
    run_two_vector(data, &Native, &RefBlas)
}

/// Combined target over every level-1 routine.
pub fn fuzz_mixed(data: &[u8]) -> FuzzStatus {
    run_mixed(data, &Native, &RefBlas)
}
