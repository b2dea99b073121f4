//! Linear range mapping between a generic control domain and device-native values.
//!
//! Callers work with a generic level (sidetone is `0..=128`); every device
//! family remaps that level into whatever byte range its firmware expects.
//! All arithmetic runs in `i128` and the result is clamped, so out-of-range
//! inputs saturate at the output bounds instead of wrapping.

/// Remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Uses truncating integer division, so `map(64, 0, 128, 200, 255) == 227`.
/// The input is clamped to the input interval first and the result to the
/// output interval; reversed output intervals (`out_min > out_max`) are
/// supported.
///
/// `in_min == in_max` is a caller bug. Debug builds assert; release builds
/// return `out_min`.
pub fn map(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    debug_assert_ne!(in_min, in_max, "degenerate input interval");

    let (lo, hi) = if in_min <= in_max {
        (in_min, in_max)
    } else {
        (in_max, in_min)
    };
    let value = i128::from(value.clamp(lo, hi));

    let in_span = i128::from(in_max) - i128::from(in_min);
    let out_span = i128::from(out_max) - i128::from(out_min);

    let Some(offset) = ((value - i128::from(in_min)) * out_span).checked_div(in_span) else {
        return out_min;
    };
    let mapped = i128::from(out_min) + offset;

    let (out_lo, out_hi) = if out_min <= out_max {
        (out_min, out_max)
    } else {
        (out_max, out_min)
    };
    // Clamped into an i32 interval, so the conversion cannot fail.
    i32::try_from(mapped.clamp(i128::from(out_lo), i128::from(out_hi))).unwrap_or(out_lo)
}

/// A fixed `(in_min, in_max, out_min, out_max)` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMapping {
    pub in_min: i32,
    pub in_max: i32,
    pub out_min: i32,
    pub out_max: i32,
}

impl RangeMapping {
    pub const fn new(in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Self {
        Self {
            in_min,
            in_max,
            out_min,
            out_max,
        }
    }

    pub fn map(&self, value: i32) -> i32 {
        map(value, self.in_min, self.in_max, self.out_min, self.out_max)
    }

    /// Map and narrow to a report byte.
    ///
    /// Output intervals reaching outside `0..=255` saturate at the byte bounds.
    pub fn map_to_u8(&self, value: i32) -> u8 {
        let mapped = self.map(value).clamp(0, i32::from(u8::MAX));
        u8::try_from(mapped).unwrap_or(u8::MAX)
    }
}
