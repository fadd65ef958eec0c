pub mod config;
pub mod geo;
pub mod logging;

/// Round to a fixed number of decimals; the response payload carries fixed
/// per-field precision.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);

    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(3.14159, 3), 3.142);
        assert_eq!(round_to(69.99999, 1), 70.0);
        assert_eq!(round_to(0.25, 2), 0.25);
    }
}
