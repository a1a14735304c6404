pub mod correction;
pub mod formulas;

pub use correction::{correction_constant, WindBand, CORRECTION_TABLE};
pub use formulas::{calculate_actual_min_temp, calculate_min_temp, predict_min_temp};
