use songrank_core::constants::PROVOCATION_STDDEV_SCALE;

/// Provocation multiplier: rewards songs that lists disagree on.
///
/// ```text
/// 1 + boost × population_stddev(ranks) / 100
/// ```
///
/// 1.0 with fewer than two ranks.
pub fn multiplier(ranks: &[f64], boost: f64) -> f64 {
    if ranks.len() <= 1 {
        return 1.0;
    }
    1.0 + boost * (population_stddev(ranks) / PROVOCATION_STDDEV_SCALE)
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
