//! Parameter assembly: decode a full parameter set in a fixed field order.
//!
//! Each assembler advances the cursor field by field and aborts on the
//! first truncated field, so a rejected iteration has no side effects.
//! The field orders (and the matrix storage bound `ld * rows + cols`,
//! which is deliberately looser than a tight leading-dimension layout)
//! are corpus-compatibility contracts and must not be reordered.

use crate::decode::{DecodeError, take_f64, take_f64s, take_flags, take_uint};

// ---------------------------------------------------------------------------
// Decoded shapes
// ---------------------------------------------------------------------------

/// A strided vector operand: `data` backing storage plus element stride.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorParams {
    pub inc: usize,
    pub data: Vec<f64>,
}

/// A matrix operand described by (rows, cols, leading dimension).
///
/// The combined entry point decodes these for cursor alignment but never
/// passes them to a routine; they are scaffolding for future matrix
/// drivers.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixParams {
    pub rows: usize,
    pub cols: usize,
    pub ld: usize,
    pub data: Vec<f64>,
}

/// Parameters for the single-vector entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct OneVecParams {
    pub n: usize,
    pub x: VectorParams,
    pub alpha: f64,
}

/// Parameters for the two-vector entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoVecParams {
    pub n: usize,
    pub x: VectorParams,
    pub y: VectorParams,
    pub alpha: f64,
    pub beta: f64,
}

/// Parameters for the combined entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedParams {
    /// Consumed but unused downstream; reserved for future branching.
    pub selector: u8,
    pub x: VectorParams,
    pub y: VectorParams,
    pub matrices: [MatrixParams; 3],
    /// Scalar bank: alpha, beta, and rotation coefficients.
    pub scalars: [f64; 8],
    /// Flag byte, consumed to keep cursor alignment; unused downstream.
    pub flags: [bool; 8],
    /// Auxiliary integer, reduced to a rotation-mode flag downstream.
    pub aux: i64,
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// stride (1 byte), element count (2 bytes LE), then that many doubles.
fn take_vector(data: &[u8]) -> Result<(VectorParams, &[u8]), DecodeError> {
    let (inc, data) = take_uint(data, 1)?;
    let (len, data) = take_uint(data, 2)?;
    let (values, data) = take_f64s(data, len)?;
    Ok((VectorParams { inc, data: values }, data))
}

/// rows, cols, ld (1 byte each), then `ld * rows + cols` doubles.
fn take_matrix(data: &[u8]) -> Result<(MatrixParams, &[u8]), DecodeError> {
    let (rows, data) = take_uint(data, 1)?;
    let (cols, data) = take_uint(data, 1)?;
    let (ld, data) = take_uint(data, 1)?;
    let (values, data) = take_f64s(data, ld * rows + cols)?;
    Ok((
        MatrixParams {
            rows,
            cols,
            ld,
            data: values,
        },
        data,
    ))
}

// ---------------------------------------------------------------------------
// Assemblers
// ---------------------------------------------------------------------------

/// n (1), inc_x (1), len_x (2), x doubles, alpha (8).
pub fn decode_one_vector(data: &[u8]) -> Result<OneVecParams, DecodeError> {
    let (n, data) = take_uint(data, 1)?;
    let (x, data) = take_vector(data)?;
    let (alpha, _) = take_f64(data)?;
    Ok(OneVecParams { n, x, alpha })
}

/// n (1), x vector, y vector, alpha (8), beta (8).
pub fn decode_two_vector(data: &[u8]) -> Result<TwoVecParams, DecodeError> {
    let (n, data) = take_uint(data, 1)?;
    let (x, data) = take_vector(data)?;
    let (y, data) = take_vector(data)?;
    let (alpha, data) = take_f64(data)?;
    let (beta, _) = take_f64(data)?;
    Ok(TwoVecParams { n, x, y, alpha, beta })
}

/// selector (1), x vector, y vector, three matrices, eight scalar
/// doubles, flag byte, auxiliary byte.
pub fn decode_mixed(data: &[u8]) -> Result<MixedParams, DecodeError> {
    let (selector, data) = take_uint(data, 1)?;
    let (x, data) = take_vector(data)?;
    let (y, data) = take_vector(data)?;
    let (a, data) = take_matrix(data)?;
    let (b, data) = take_matrix(data)?;
    let (c, data) = take_matrix(data)?;
    let (scalar_vec, data) = take_f64s(data, 8)?;
    let (flags, data) = take_flags(data)?;
    let (aux, _) = take_uint(data, 1)?;

    let mut scalars = [0.0; 8];
    scalars.copy_from_slice(&scalar_vec);

    Ok(MixedParams {
        selector: selector as u8,
        x,
        y,
        matrices: [a, b, c],
        scalars,
        flags,
        aux: aux as i64,
    })
}
