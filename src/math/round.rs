/// Decimal places kept when generating depth axes.
pub const DEPTH_DIGITS: u32 = 10;

/// Round half to even at `digits` decimal places.
pub fn round(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    // 10^digits is split in two factors so that neither overflows
    let (pow1, pow2) = if digits > 22 {
        (10.0_f64.powi((digits - 22) as i32), 1e22)
    } else {
        (10.0_f64.powi(digits as i32), 1.0)
    };

    let y = (x * pow1) * pow2;
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}

/// Snap a generated depth onto `DEPTH_DIGITS`, removing the binary drift of `i * step`.
pub fn snap_depth(depth: f64) -> f64 {
    round(depth, DEPTH_DIGITS)
}
