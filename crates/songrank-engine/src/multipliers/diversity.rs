/// Cluster diversity multiplier.
///
/// ```text
/// 1 + boost × (distinct clusters within threshold - 1)
/// ```
///
/// 1.0 when no contribution ranked within the cluster threshold.
pub fn multiplier(distinct_clusters: usize, boost: f64) -> f64 {
    if distinct_clusters == 0 {
        return 1.0;
    }
    1.0 + boost * (distinct_clusters - 1) as f64
}
