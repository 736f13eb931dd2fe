//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f32 into the u32 range, returning 0 for negative or non-finite values.
#[must_use]
pub fn floor_f32_to_u32(value: f32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    cast::<f32, u32>(value.floor()).unwrap_or(u32::MAX)
}

/// Narrow a score to the persisted integer width, saturating at `i32::MAX`.
#[must_use]
pub fn score_to_stored(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Widen a persisted integer back into a score. Negative values are treated as absent.
#[must_use]
pub fn stored_to_score(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}
