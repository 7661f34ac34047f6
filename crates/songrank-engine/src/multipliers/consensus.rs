/// Consensus multiplier, normalized by the most-listed song:
///
/// ```text
/// 1 + boost × ln(qualifying_count) / ln(max_list_count)
/// ```
///
/// 1.0 when `qualifying_count <= 1` or `max_list_count <= 1`. The most-listed
/// song always receives exactly `1 + boost`.
pub fn multiplier(qualifying_count: usize, max_list_count: usize, boost: f64) -> f64 {
    if qualifying_count <= 1 || max_list_count <= 1 {
        return 1.0;
    }
    let ln_max = (max_list_count as f64).ln();
    1.0 + boost * (qualifying_count as f64).ln() / ln_max
}
