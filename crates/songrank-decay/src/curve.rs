/// Consensus curve: `(1 + k) / (rank + k)`.
///
/// Exactly 1.0 at rank 1 for every k. Larger k flattens the curve so
/// lower placements keep more of their value.
pub fn consensus(rank: f64, k_value: f64) -> f64 {
    (1.0 + k_value) / (rank + k_value)
}

/// Conviction curve: `1 / rank^p`.
///
/// Exactly 1.0 at rank 1 for every p. Larger p concentrates value at
/// the top of each list.
pub fn conviction(rank: f64, p_exponent: f64) -> f64 {
    1.0 / rank.powf(p_exponent)
}
