//! Statistical inference for fitted quantities.

mod correlation;

pub use correlation::CorrelationTest;
