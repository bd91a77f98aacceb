#[derive(Debug, Clone)]
pub struct ReportThresholds {
    pub strength_min: f64,
    pub improvement_max: f64,
    pub extremes_k: usize,
    pub histogram_bins: usize,
}

impl ReportThresholds {
    pub fn default_v1() -> Self {
        Self {
            strength_min: 15.0,
            improvement_max: 5.0,
            extremes_k: 5,
            histogram_bins: 10,
        }
    }
}
