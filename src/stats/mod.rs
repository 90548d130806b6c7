//! Descriptive statistics over one or two samples.

mod descriptive;

pub use descriptive::{correlation, covariance, mean, sample_std_dev, variance};
