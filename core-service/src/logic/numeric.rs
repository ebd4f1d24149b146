//! Display rounding helpers

/// Round to `decimals` places, exact halves to the even neighbour
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
