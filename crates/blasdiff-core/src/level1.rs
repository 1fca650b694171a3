//! The routine-under-test contract shared by both implementation families.
//!
//! The harness never implements a numerical routine itself; it compares
//! two crates that each implement [`Level1`]. The trait doubles as the
//! contract-violation specification: both families validate arguments in
//! the same order and panic with the same message constants, so that
//! identical violations produce identical fault payloads for the oracle.

// ---------------------------------------------------------------------------
// Contract-violation messages
// ---------------------------------------------------------------------------

/// Panic payloads for argument-contract violations. Shared between the
/// families (like the BLAS error strings shared by independent bindings)
/// so equal violations compare equal.
pub mod contract {
    pub const ZERO_INC_X: &str = "blas: zero x stride";
    pub const ZERO_INC_Y: &str = "blas: zero y stride";
    pub const SHORT_X: &str = "blas: insufficient length of x";
    pub const SHORT_Y: &str = "blas: insufficient length of y";
}

// ---------------------------------------------------------------------------
// Modified-rotation parameters
// ---------------------------------------------------------------------------

/// The four modified-Givens variants, reduced from the fuzzed auxiliary
/// integer via `abs(aux) % 4 - 2` as in the reference flag encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotmFlag {
    /// H is the identity; the rotation is a no-op.
    Identity,
    /// Full H: all four entries taken from `h`.
    Rescaling,
    /// Unit diagonal: only h21 and h12 taken from `h`.
    OffDiagonal,
    /// Anti-unit off-diagonal: h12 = 1, h21 = -1, diagonal from `h`.
    Scaled,
}

impl RotmFlag {
    /// Reduce an arbitrary auxiliary integer onto the four variants.
    pub fn from_aux(aux: i64) -> Self {
        match aux.abs() % 4 {
            0 => RotmFlag::Identity,
            1 => RotmFlag::Rescaling,
            2 => RotmFlag::OffDiagonal,
            _ => RotmFlag::Scaled,
        }
    }
}

/// Parameters for [`Level1::drotm`]. `h` is stored column-major as
/// `[h11, h21, h12, h22]`; which entries are read depends on `flag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrotmParams {
    pub flag: RotmFlag,
    pub h: [f64; 4],
}

// ---------------------------------------------------------------------------
// Level1 trait
// ---------------------------------------------------------------------------

/// One family of double-precision level-1 routines.
///
/// Vectors are described by a logical element count `n` and a storage
/// stride; element i lives at buffer index `i * inc`. Every routine
/// validates in this order, panicking with the [`contract`] constants:
///
/// 1. `inc_x == 0` (then `inc_y == 0` where a y vector exists);
/// 2. `n == 0` returns the routine's neutral result without touching data;
/// 3. `buf.len() < (n - 1) * inc + 1` for x, then for y;
/// 4. routine-specific early outs (`daxpy` with `alpha == 0`, `drotm`
///    with [`RotmFlag::Identity`]).
pub trait Level1 {
    /// y\[i\] = x\[i\].
    fn dcopy(&self, n: usize, x: &[f64], inc_x: usize, y: &mut [f64], inc_y: usize);

    /// Exchange x\[i\] and y\[i\].
    fn dswap(&self, n: usize, x: &mut [f64], inc_x: usize, y: &mut [f64], inc_y: usize);

    /// x\[i\] = alpha * x\[i\].
    fn dscal(&self, n: usize, alpha: f64, x: &mut [f64], inc_x: usize);

    /// y\[i\] = alpha * x\[i\] + y\[i\].
    fn daxpy(&self, n: usize, alpha: f64, x: &[f64], inc_x: usize, y: &mut [f64], inc_y: usize);

    /// Sum of x\[i\] * y\[i\].
    fn ddot(&self, n: usize, x: &[f64], inc_x: usize, y: &[f64], inc_y: usize) -> f64;

    /// Euclidean norm of x, computed overflow-safely.
    fn dnrm2(&self, n: usize, x: &[f64], inc_x: usize) -> f64;

    /// Sum of |x\[i\]|.
    fn dasum(&self, n: usize, x: &[f64], inc_x: usize) -> f64;

    /// Logical index of the first element of maximum absolute value, or
    /// `None` when n == 0. Implementation-defined when x contains NaN.
    fn idamax(&self, n: usize, x: &[f64], inc_x: usize) -> Option<usize>;

    /// Plane rotation: (x, y) = (c*x + s*y, c*y - s*x).
    fn drot(
        &self,
        n: usize,
        x: &mut [f64],
        inc_x: usize,
        y: &mut [f64],
        inc_y: usize,
        c: f64,
        s: f64,
    );

    /// Modified plane rotation: (x, y) = (h11*x + h12*y, h21*x + h22*y)
    /// with H selected by `param.flag`.
    fn drotm(
        &self,
        n: usize,
        x: &mut [f64],
        inc_x: usize,
        y: &mut [f64],
        inc_y: usize,
        param: &DrotmParams,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_reduction_covers_all_variants() {
        assert_eq!(RotmFlag::from_aux(0), RotmFlag::Identity);
        assert_eq!(RotmFlag::from_aux(1), RotmFlag::Rescaling);
        assert_eq!(RotmFlag::from_aux(2), RotmFlag::OffDiagonal);
        assert_eq!(RotmFlag::from_aux(3), RotmFlag::Scaled);
        assert_eq!(RotmFlag::from_aux(4), RotmFlag::Identity);
    }

    #[test]
    fn flag_reduction_takes_absolute_value() {
        assert_eq!(RotmFlag::from_aux(-1), RotmFlag::Rescaling);
        assert_eq!(RotmFlag::from_aux(-6), RotmFlag::OffDiagonal);
        assert_eq!(RotmFlag::from_aux(255), RotmFlag::Scaled);
    }
}
