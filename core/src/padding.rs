//! padding.rs
//! Sizes the trailing filler so the container fits a square pixel grid.
//!
//! The total length must be `m * m` for some `m` that is a multiple of 4:
//! pixel count is then `m*m / 4 = (m/2)^2`, and `m/2` is the integer side
//! length of the square RGBA grid. Deriving `s` from `T/16` (not `T/4`) is
//! what forces `m = 4*s` to be a multiple of 4.

use crate::constants::BYTES_PER_PIXEL;
use crate::error::ContainerError;

/// Sizing decision for one container: how much filler to append and what
/// square raster the final buffer maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingPlan {
    /// Header + payload length, before padding.
    pub unpadded_len: usize,
    /// Final container length (`m * m`).
    pub total_len: usize,
    /// Trailing filler bytes (`total_len - unpadded_len`).
    pub end_padding: usize,
    /// Side length of the square pixel grid (`m / 2`).
    pub grid_side: usize,
}

impl PaddingPlan {
    /// Compute the minimum padding for an unpadded length `t`.
    ///
    /// `s = ceil(sqrt(t / 16))`, `m = 4 * s`, total `= m * m`. Exact integer
    /// arithmetic throughout: `s` is the smallest integer with
    /// `16 * s^2 >= t`, so no float rounding can leak into the wire format.
    pub fn for_unpadded_len(t: usize) -> Result<Self, ContainerError> {
        let s = ceil_sqrt_div16(t);
        let m = 4 * s;
        let total_len = m * m;

        if total_len < t {
            return Err(ContainerError::PaddingArithmetic {
                unpadded_len: t,
                total_len,
            });
        }

        let grid_side = m / 2;
        // m is a multiple of 4, so the grid side is even and the pixel
        // count (m/2)^2 reassembles to exactly total_len bytes.
        if grid_side * grid_side * BYTES_PER_PIXEL != total_len {
            return Err(ContainerError::PaddingArithmetic {
                unpadded_len: t,
                total_len,
            });
        }

        Ok(Self {
            unpadded_len: t,
            total_len,
            end_padding: total_len - t,
            grid_side,
        })
    }
}

/// Side length of the square pixel grid for an already-encoded buffer.
///
/// Fails unless `len` is a valid final length (divisible by 4 with a
/// perfect-square pixel count); the raster boundary needs this to frame
/// the buffer as an image.
pub fn grid_side_for_len(len: usize) -> Result<usize, ContainerError> {
    let violation = ContainerError::PaddingArithmetic {
        unpadded_len: len,
        total_len: len,
    };

    if len % BYTES_PER_PIXEL != 0 {
        return Err(violation);
    }
    let pixels = len / BYTES_PER_PIXEL;
    let side = isqrt(pixels);
    if side * side != pixels {
        return Err(violation);
    }
    Ok(side)
}

/// Smallest `s` with `16 * s^2 >= t`, i.e. `ceil(sqrt(t / 16))`.
fn ceil_sqrt_div16(t: usize) -> usize {
    // ceil(t / 16), then ceil-sqrt of that.
    let q = t.div_ceil(16);
    let mut s = isqrt(q);
    if s * s < q {
        s += 1;
    }
    s
}

/// Floor integer square root (Newton's method, converges from above).
fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_exact_and_floor() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(35), 5);
        assert_eq!(isqrt(36), 6);
        assert_eq!(isqrt(37), 6);
    }

    #[test]
    fn ceil_sqrt_div16_boundaries() {
        // 16 * s^2 thresholds: t in (16*(s-1)^2, 16*s^2] maps to s.
        assert_eq!(ceil_sqrt_div16(0), 0);
        assert_eq!(ceil_sqrt_div16(1), 1);
        assert_eq!(ceil_sqrt_div16(16), 1);
        assert_eq!(ceil_sqrt_div16(17), 2);
        assert_eq!(ceil_sqrt_div16(64), 2);
        assert_eq!(ceil_sqrt_div16(65), 3);
        assert_eq!(ceil_sqrt_div16(89), 3);
        assert_eq!(ceil_sqrt_div16(144), 3);
        assert_eq!(ceil_sqrt_div16(145), 4);
    }
}
