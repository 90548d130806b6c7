//! Core types for regression analysis.

mod options;
mod result;

pub use options::{OptionsError, RegressionOptions, RegressionOptionsBuilder, DEFAULT_MIN_CORRELATION};
pub use result::RegressionResult;
pub(crate) use result::linear_predictor;
