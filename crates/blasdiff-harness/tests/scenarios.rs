//! End-to-end scenarios for the fuzz entry points, driven by hand-built
//! byte buffers in the exact wire layout the assemblers expect.

use blasdiff_core::driver::check_daxpy;
use blasdiff_core::level1::Level1;
use blasdiff_harness::{FuzzStatus, fuzz_mixed, fuzz_one_vector, fuzz_two_vector};
use blasdiff_native::Native;
use blasdiff_refblas::RefBlas;

// ---------------------------------------------------------------------------
// Buffer builders
// ---------------------------------------------------------------------------

fn push_f64s(buf: &mut Vec<u8>, values: &[f64]) {
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

fn push_vector(buf: &mut Vec<u8>, inc: u8, values: &[f64]) {
    buf.push(inc);
    buf.extend_from_slice(&(values.len() as u16).to_le_bytes());
    push_f64s(buf, values);
}

/// selector + x + y + three zero-sized matrices + scalar bank + flag byte
/// + aux byte.
fn mixed_buffer(
    selector: u8,
    inc_x: u8,
    x: &[f64],
    inc_y: u8,
    y: &[f64],
    scalars: &[f64; 8],
    flag_byte: u8,
    aux: u8,
) -> Vec<u8> {
    let mut buf = vec![selector];
    push_vector(&mut buf, inc_x, x);
    push_vector(&mut buf, inc_y, y);
    for _ in 0..3 {
        buf.extend_from_slice(&[0, 0, 0]);
    }
    push_f64s(&mut buf, scalars);
    buf.push(flag_byte);
    buf.push(aux);
    buf
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// Scenario A: a fully formed buffer is accepted, and the axpy it encodes
/// produces [6, 9, 12] under both families.
#[test]
fn scenario_a_accepts_and_axpy_agrees() {
    let buf = mixed_buffer(
        5,
        1,
        &[1.0, 2.0, 3.0],
        1,
        &[4.0, 5.0, 6.0],
        &[2.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        0,
        1,
    );
    assert_eq!(fuzz_mixed(&buf), FuzzStatus::Accept);

    // The encoded linear-combination update, checked directly.
    let x = [1.0, 2.0, 3.0];
    let mut y_nat = [4.0, 5.0, 6.0];
    let mut y_ref = [4.0, 5.0, 6.0];
    Native.daxpy(3, 2.0, &x, 1, &mut y_nat, 1);
    RefBlas.daxpy(3, 2.0, &x, 1, &mut y_ref, 1);
    assert_eq!(y_nat, [6.0, 9.0, 12.0]);
    assert_eq!(y_ref, [6.0, 9.0, 12.0]);
}

/// Scenario B: a buffer exhausted before the first stride byte rejects
/// without invoking anything (entry-level; the no-invocation half is
/// covered by the counting-family test in blasdiff-core).
#[test]
fn scenario_b_truncated_buffer_rejects() {
    assert_eq!(fuzz_mixed(&[5]), FuzzStatus::Reject);
    assert_eq!(fuzz_one_vector(&[5]), FuzzStatus::Reject);
    assert_eq!(fuzz_two_vector(&[5]), FuzzStatus::Reject);
    assert!(FuzzStatus::Reject.code() <= 0);
}

/// Scenario C: NaN in x skips the idamax index comparison but the norm
/// and absolute-sum comparisons still run and agree (or both yield NaN).
#[test]
fn scenario_c_nan_input_is_not_a_divergence() {
    let buf = mixed_buffer(
        0,
        1,
        &[1.0, f64::NAN, 3.0],
        1,
        &[4.0, 5.0, 6.0],
        &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        0,
        0,
    );
    assert_eq!(fuzz_mixed(&buf), FuzzStatus::Accept);

    let x = [1.0, f64::NAN, 3.0];
    assert!(Native.dnrm2(3, &x, 1).is_nan());
    assert!(RefBlas.dnrm2(3, &x, 1).is_nan());
    assert!(Native.dasum(3, &x, 1).is_nan());
    assert!(RefBlas.dasum(3, &x, 1).is_nan());
}

/// Scenario D: stride zero with a nonzero element count faults both
/// families with equal payloads, so the oracle reports no divergence.
#[test]
fn scenario_d_zero_stride_faults_symmetrically() {
    let buf = mixed_buffer(
        0,
        0,
        &[1.0, 2.0],
        1,
        &[3.0, 4.0],
        &[1.0; 8],
        0,
        0,
    );
    assert_eq!(fuzz_mixed(&buf), FuzzStatus::Accept);

    // Same through a single driver, for a narrower witness.
    check_daxpy("zero stride", &Native, &RefBlas, 2, 1.0, &[1.0, 2.0], 0, &[3.0, 4.0], 1);
}

/// The standalone entry points keep the original layouts with an explicit
/// leading n byte.
#[test]
fn one_vector_layout_accepts() {
    let mut buf = vec![3u8];
    push_vector(&mut buf, 1, &[1.0, -2.0, 3.0]);
    push_f64s(&mut buf, &[2.5]);
    assert_eq!(fuzz_one_vector(&buf), FuzzStatus::Accept);
}

#[test]
fn two_vector_layout_accepts() {
    let mut buf = vec![2u8];
    push_vector(&mut buf, 1, &[1.0, 2.0]);
    push_vector(&mut buf, 1, &[3.0, 4.0]);
    push_f64s(&mut buf, &[0.6, 0.8]);
    assert_eq!(fuzz_two_vector(&buf), FuzzStatus::Accept);
}

/// n larger than the decoded buffers makes every routine fault on both
/// sides identically; the iteration is still accepted.
#[test]
fn oversized_n_faults_symmetrically() {
    let mut buf = vec![200u8];
    push_vector(&mut buf, 1, &[1.0]);
    push_f64s(&mut buf, &[1.0]);
    assert_eq!(fuzz_one_vector(&buf), FuzzStatus::Accept);
}

/// Each drotm variant selected by the aux byte runs without divergence.
#[test]
fn all_rotation_modes_agree() {
    for aux in 0..8u8 {
        let buf = mixed_buffer(
            0,
            1,
            &[1.0, -2.0],
            1,
            &[0.5, 4.0],
            &[2.0, -0.5, 1.5, 3.0, 0.0, 0.0, 0.0, 0.0],
            0,
            aux,
        );
        assert_eq!(fuzz_mixed(&buf), FuzzStatus::Accept);
    }
}

/// Mismatched vector lengths exercise the min-length rule for two-vector
/// routines and the full x length for single-vector routines.
#[test]
fn mismatched_lengths_agree() {
    let buf = mixed_buffer(
        0,
        1,
        &[1.0, 2.0, 3.0, 4.0],
        1,
        &[5.0],
        &[1.0; 8],
        0xff,
        3,
    );
    assert_eq!(fuzz_mixed(&buf), FuzzStatus::Accept);
}
