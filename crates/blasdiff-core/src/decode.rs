//! Byte cursor decoding: interpret a buffer prefix as a typed value.
//!
//! Every function is stateless: it takes the remaining buffer and returns
//! the decoded value together with the suffix left over, or a
//! [`DecodeError`] when the buffer is too short. Cursor advancement is
//! all-or-nothing per value; a failed decode consumes nothing.

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Recoverable decode failure: the buffer ran out before the field did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("input truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
}

fn truncated(needed: usize, available: usize) -> DecodeError {
    DecodeError::Truncated { needed, available }
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

/// Decode a little-endian unsigned integer of `width` bytes.
///
/// Only widths 1 and 2 are part of the wire format. Any other width is a
/// harness bug, not a property of the input, and panics.
pub fn take_uint(data: &[u8], width: usize) -> Result<(usize, &[u8]), DecodeError> {
    if data.len() < width {
        return Err(truncated(width, data.len()));
    }
    let value = match width {
        1 => data[0] as usize,
        2 => u16::from_le_bytes([data[0], data[1]]) as usize,
        _ => panic!("unsupported integer width: {width}"),
    };
    Ok((value, &data[width..]))
}

/// Decode 8 bytes as an IEEE-754 double, little-endian bit order.
pub fn take_f64(data: &[u8]) -> Result<(f64, &[u8]), DecodeError> {
    let Some(bytes) = data.first_chunk::<8>() else {
        return Err(truncated(8, data.len()));
    };
    Ok((f64::from_le_bytes(*bytes), &data[8..]))
}

/// Decode `count` consecutive doubles. All-or-nothing: a short tail fails
/// the whole sequence and no partial vector is returned.
pub fn take_f64s(data: &[u8], count: usize) -> Result<(Vec<f64>, &[u8]), DecodeError> {
    let needed = count * 8;
    if data.len() < needed {
        return Err(truncated(needed, data.len()));
    }
    let values = data[..needed]
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();
    Ok((values, &data[needed..]))
}

/// Decode one byte as eight independent boolean flags, bit i = flag i.
pub fn take_flags(data: &[u8]) -> Result<([bool; 8], &[u8]), DecodeError> {
    let Some(&byte) = data.first() else {
        return Err(truncated(1, data.len()));
    };
    let mut flags = [false; 8];
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = byte & (1 << i) != 0;
    }
    Ok((flags, &data[1..]))
}
