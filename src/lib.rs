pub mod answers;
pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod form;
pub mod output;
pub mod scoring;
pub mod telemetry;
pub mod valuation;

pub use answers::{AnswerMap, AnswerValue};
pub use assessment::{Assessor, ValuationResult};
pub use error::{CatalogError, InputError};
