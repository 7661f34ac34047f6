/// Point value of a rank.
pub trait IDecayFunction: Send + Sync {
    /// Unweighted points for `rank`, rank bonus included.
    /// Non-negative and non-increasing in `rank`.
    fn value(&self, rank: f64) -> f64;
}
