use serde::Serialize;

/// Upper-inclusive bin edges. A mark falls in bin `i` when `edges[i] < mark <= edges[i + 1]`.
pub const CATEGORY_EDGES: [f64; 5] = [0.0, 5.0, 10.0, 15.0, 25.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PerformanceCategory {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Good,
    Excellent,
}

impl PerformanceCategory {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceCategory::NeedsImprovement => "Needs Improvement",
            PerformanceCategory::BelowAverage => "Below Average",
            PerformanceCategory::Good => "Good",
            PerformanceCategory::Excellent => "Excellent",
        }
    }
}

pub fn category_order() -> &'static [PerformanceCategory] {
    &[
        PerformanceCategory::NeedsImprovement,
        PerformanceCategory::BelowAverage,
        PerformanceCategory::Good,
        PerformanceCategory::Excellent,
    ]
}

/// Returns `None` for marks outside `(0, 25]`, including exactly 0 and NaN.
pub fn categorize(mark: f64) -> Option<PerformanceCategory> {
    let order = category_order();
    for (i, pair) in CATEGORY_EDGES.windows(2).enumerate() {
        if mark > pair[0] && mark <= pair[1] {
            return Some(order[i]);
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
