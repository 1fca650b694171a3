//! Implementation family 2: reference-style level-1 routines.
//!
//! A pure-Rust port of the netlib reference algorithms, written with the
//! explicit cursor arithmetic of the Fortran originals. This family
//! stands in for a foreign-linked BLAS so the workspace builds without a
//! system library; the harness treats it as an opaque second
//! implementation. Validation order and messages come from
//! [`blasdiff_core::level1`], matching the other family.

use blasdiff_core::level1::{DrotmParams, Level1, RotmFlag, contract};

/// The reference-style family. Stateless; construct freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefBlas;

impl Level1 for RefBlas {
    fn dcopy(&self, n: usize, x: &[f64], inc_x: usize, y: &mut [f64], inc_y: usize) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        let mut ix = 0;
        let mut iy = 0;
        for _ in 0..n {
            y[iy] = x[ix];
            ix += inc_x;
            iy += inc_y;
        }
    }

    fn dswap(&self, n: usize, x: &mut [f64], inc_x: usize, y: &mut [f64], inc_y: usize) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        let mut ix = 0;
        let mut iy = 0;
        for _ in 0..n {
            let dtemp = x[ix];
            x[ix] = y[iy];
            y[iy] = dtemp;
            ix += inc_x;
            iy += inc_y;
        }
    }

    fn dscal(&self, n: usize, alpha: f64, x: &mut [f64], inc_x: usize) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        let mut ix = 0;
        for _ in 0..n {
            x[ix] = alpha * x[ix];
            ix += inc_x;
        }
    }

    fn daxpy(&self, n: usize, alpha: f64, x: &[f64], inc_x: usize, y: &mut [f64], inc_y: usize) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        if alpha == 0.0 {
            return;
        }
        let mut ix = 0;
        let mut iy = 0;
        for _ in 0..n {
            y[iy] += alpha * x[ix];
            ix += inc_x;
            iy += inc_y;
        }
    }

    fn ddot(&self, n: usize, x: &[f64], inc_x: usize, y: &[f64], inc_y: usize) -> f64 {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return 0.0;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        let mut dtemp = 0.0;
        let mut ix = 0;
        let mut iy = 0;
        for _ in 0..n {
            dtemp += x[ix] * y[iy];
            ix += inc_x;
            iy += inc_y;
        }
        dtemp
    }

    fn dnrm2(&self, n: usize, x: &[f64], inc_x: usize) -> f64 {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if n == 0 {
            return 0.0;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        // The dlassq-style running rescale from the reference dnrm2.
        let mut scale = 0.0;
        let mut ssq = 1.0;
        let mut ix = 0;
        for _ in 0..n {
            if x[ix] != 0.0 {
                let absxi = x[ix].abs();
                if scale < absxi {
                    let r = scale / absxi;
                    ssq = 1.0 + ssq * (r * r);
                    scale = absxi;
                } else {
                    let r = absxi / scale;
                    ssq += r * r;
                }
            }
            ix += inc_x;
        }
        scale * ssq.sqrt()
    }

    fn dasum(&self, n: usize, x: &[f64], inc_x: usize) -> f64 {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if n == 0 {
            return 0.0;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        let mut dtemp = 0.0;
        let mut ix = 0;
        for _ in 0..n {
            dtemp += x[ix].abs();
            ix += inc_x;
        }
        dtemp
    }

    fn idamax(&self, n: usize, x: &[f64], inc_x: usize) -> Option<usize> {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if n == 0 {
            return None;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        let mut imax = 0;
        let mut dmax = x[0].abs();
        let mut ix = inc_x;
        for i in 1..n {
            if x[ix].abs() > dmax {
                imax = i;
                dmax = x[ix].abs();
            }
            ix += inc_x;
        }
        Some(imax)
    }

    fn drot(
        &self,
        n: usize,
        x: &mut [f64],
        inc_x: usize,
        y: &mut [f64],
        inc_y: usize,
        c: f64,
        s: f64,
    ) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        let mut ix = 0;
        let mut iy = 0;
        for _ in 0..n {
            let dtemp = c * x[ix] + s * y[iy];
            y[iy] = c * y[iy] - s * x[ix];
            x[ix] = dtemp;
            ix += inc_x;
            iy += inc_y;
        }
    }

    fn drotm(
        &self,
        n: usize,
        x: &mut [f64],
        inc_x: usize,
        y: &mut [f64],
        inc_y: usize,
        param: &DrotmParams,
    ) {
        if inc_x == 0 {
            panic!("{}", contract::ZERO_INC_X);
        }
        if inc_y == 0 {
            panic!("{}", contract::ZERO_INC_Y);
        }
        if n == 0 {
            return;
        }
        if x.len() < (n - 1) * inc_x + 1 {
            panic!("{}", contract::SHORT_X);
        }
        if y.len() < (n - 1) * inc_y + 1 {
            panic!("{}", contract::SHORT_Y);
        }
        // One specialised loop per flag, as in the Fortran source.
        let mut ix = 0;
        let mut iy = 0;
        match param.flag {
            RotmFlag::Identity => {}
            RotmFlag::Rescaling => {
                let [h11, h21, h12, h22] = param.h;
                for _ in 0..n {
                    let w = x[ix];
                    let z = y[iy];
                    x[ix] = h11 * w + h12 * z;
                    y[iy] = h21 * w + h22 * z;
                    ix += inc_x;
                    iy += inc_y;
                }
            }
            RotmFlag::OffDiagonal => {
                let h21 = param.h[1];
                let h12 = param.h[2];
                for _ in 0..n {
                    let w = x[ix];
                    let z = y[iy];
                    x[ix] = w + h12 * z;
                    y[iy] = h21 * w + z;
                    ix += inc_x;
                    iy += inc_y;
                }
            }
            RotmFlag::Scaled => {
                let h11 = param.h[0];
                let h22 = param.h[3];
                for _ in 0..n {
                    let w = x[ix];
                    let z = y[iy];
                    x[ix] = h11 * w + z;
                    y[iy] = -w + h22 * z;
                    ix += inc_x;
                    iy += inc_y;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daxpy_updates_y() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [4.0, 5.0, 6.0];
        RefBlas.daxpy(3, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, [6.0, 9.0, 12.0]);
    }

    #[test]
    fn dscal_respects_strides() {
        let mut x = [1.0, 99.0, 2.0];
        RefBlas.dscal(2, 10.0, &mut x, 2);
        assert_eq!(x, [10.0, 99.0, 20.0]);
    }

    #[test]
    fn ddot_and_dasum() {
        let x = [1.0, -2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        assert_eq!(RefBlas.ddot(3, &x, 1, &y, 1), 12.0);
        assert_eq!(RefBlas.dasum(3, &x, 1), 6.0);
    }

    #[test]
    fn dnrm2_is_overflow_safe() {
        assert_eq!(RefBlas.dnrm2(2, &[3e200, 4e200], 1), 5e200);
    }

    #[test]
    fn idamax_returns_first_maximum() {
        assert_eq!(RefBlas.idamax(4, &[1.0, -7.0, 7.0, 2.0], 1), Some(1));
        assert_eq!(RefBlas.idamax(3, &[f64::NAN, 1.0, 2.0], 1), Some(0));
    }

    #[test]
    fn drotm_scaled_uses_unit_off_diagonal() {
        let mut x = [2.0];
        let mut y = [3.0];
        let param = DrotmParams {
            flag: RotmFlag::Scaled,
            h: [4.0, 0.0, 0.0, 5.0],
        };
        RefBlas.drotm(1, &mut x, 1, &mut y, 1, &param);
        // x = h11*2 + 3, y = -2 + h22*3.
        assert_eq!(x, [11.0]);
        assert_eq!(y, [13.0]);
    }

    #[test]
    #[should_panic(expected = "blas: zero y stride")]
    fn zero_y_stride_violates_the_contract() {
        RefBlas.dcopy(1, &[1.0], 1, &mut [0.0], 0);
    }

    #[test]
    #[should_panic(expected = "blas: insufficient length of x")]
    fn strided_length_check_uses_the_last_touched_index() {
        // n=3, inc=2 needs 5 elements; 4 is one short.
        let _ = RefBlas.dasum(3, &[1.0, 2.0, 3.0, 4.0], 2);
    }
}
