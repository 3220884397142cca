use num_complex::Complex;

/// Squared magnitude; avoids the sqrt in the hot loop.
fn mod2(z: Complex<f64>) -> f64 {
    z.re * z.re + z.im * z.im
}

/// Grayscale value for one sample point under z <- z^2 + c.
///
/// Starts at 255.0 (white) and loses `decrement` per iteration while
/// the iterate stays inside the escape radius. The loop also stops
/// once the value would fall below the minimum displayable threshold
/// of 5, so no point iterates past the range a pixel can express.
/// Escape is strict: a point exactly on the radius has not escaped.
pub fn shade(z0: Complex<f64>, c: Complex<f64>, radius_squared: f64, decrement: f64) -> f64 {
    let mut z = z0;
    let mut n = 255.0f64;
    while mod2(z) < radius_squared && n >= 5.0 {
        z = z * z + c;
        n -= decrement;
    }
    n
}

/// Truncate toward zero and clamp into the valid intensity range.
pub fn to_intensity(n: f64) -> u8 {
    (n as i32).clamp(0, 255) as u8
}
