pub mod error;
pub mod matrix;
pub mod result;

pub use error::EstimationError;
pub use matrix::{ExpertCount, PreferenceMatrix};
pub use result::{AgreementTest, EstimationResult, Verdict};
