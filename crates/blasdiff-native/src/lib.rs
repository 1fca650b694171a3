//! Implementation family 1: iterator-style level-1 routines.
//!
//! One of the two families the harness compares. The code leans on
//! iterator adapters (`step_by`, `zip`, `take`) rather than index
//! arithmetic; argument validation follows the order and messages fixed
//! by [`blasdiff_core::level1`], so a contract violation here produces
//! the same fault payload as in the other family.

use blasdiff_core::level1::{DrotmParams, Level1, RotmFlag, contract};

/// The iterator-style family. Stateless; construct freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl Level1 for Native {
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
        for (yi, &xi) in y
            .iter_mut()
            .step_by(inc_y)
            .zip(x.iter().step_by(inc_x))
            .take(n)
        {
            *yi = xi;
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
        for (xi, yi) in x
            .iter_mut()
            .step_by(inc_x)
            .zip(y.iter_mut().step_by(inc_y))
            .take(n)
        {
            std::mem::swap(xi, yi);
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
        for xi in x.iter_mut().step_by(inc_x).take(n) {
            *xi = alpha * *xi;
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
        for (yi, &xi) in y
            .iter_mut()
            .step_by(inc_y)
            .zip(x.iter().step_by(inc_x))
            .take(n)
        {
            *yi += alpha * xi;
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
        x.iter()
            .step_by(inc_x)
            .zip(y.iter().step_by(inc_y))
            .take(n)
            .map(|(&xi, &yi)| xi * yi)
            .sum()
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
        // Scaled sum of squares: overflow-safe for any finite input.
        let mut scale = 0.0;
        let mut ssq = 1.0;
        for &xi in x.iter().step_by(inc_x).take(n) {
            if xi != 0.0 {
                let absxi = xi.abs();
                if scale < absxi {
                    let r = scale / absxi;
                    ssq = 1.0 + ssq * (r * r);
                    scale = absxi;
                } else {
                    let r = absxi / scale;
                    ssq += r * r;
                }
            }
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
        x.iter().step_by(inc_x).take(n).map(|xi| xi.abs()).sum()
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
        // First maximum wins; NaN never compares greater, so a leading
        // NaN pins the answer at 0.
        let mut best = 0;
        let mut max = x[0].abs();
        for (i, &xi) in x.iter().step_by(inc_x).take(n).enumerate().skip(1) {
            let absxi = xi.abs();
            if absxi > max {
                best = i;
                max = absxi;
            }
        }
        Some(best)
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
        for (xi, yi) in x
            .iter_mut()
            .step_by(inc_x)
            .zip(y.iter_mut().step_by(inc_y))
            .take(n)
        {
            let (w, z) = (*xi, *yi);
            *xi = c * w + s * z;
            *yi = c * z - s * w;
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
        let (h11, h21, h12, h22) = match param.flag {
            RotmFlag::Identity => return,
            RotmFlag::Rescaling => (param.h[0], param.h[1], param.h[2], param.h[3]),
            RotmFlag::OffDiagonal => (1.0, param.h[1], param.h[2], 1.0),
            RotmFlag::Scaled => (param.h[0], -1.0, 1.0, param.h[3]),
        };
        for (xi, yi) in x
            .iter_mut()
            .step_by(inc_x)
            .zip(y.iter_mut().step_by(inc_y))
            .take(n)
        {
            let (w, z) = (*xi, *yi);
            *xi = h11 * w + h12 * z;
            *yi = h21 * w + h22 * z;
        }
    }
}
