/// Absolute tolerance below which a value is treated as zero.
///
/// This is the shared zero-comparison policy for the whole crate. It is
/// applied in exactly two places: rejecting a leading coefficient that is
/// effectively zero, and snapping a near-zero discriminant to exactly `0.0`
/// before the square-root step.
pub const ZERO_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `value` is within [`ZERO_TOLERANCE`] of zero.
///
/// Non-finite values are never near zero.
pub(crate) fn is_near_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}
