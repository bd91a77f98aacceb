pub mod category;
pub mod criteria;
pub mod thresholds;
