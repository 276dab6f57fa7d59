use thiserror::Error;

/// The question catalog failed validation; the engine must not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("invalid question catalog:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}

/// An answer map was rejected before it reached the valuation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("invalid number for {}", .0.join(", "))]
    InvalidNumbers(Vec<String>),
}

impl InputError {
    /// Answer keys this error refers to.
    pub fn fields(&self) -> &[String] {
        match self {
            InputError::MissingFields(fields) | InputError::InvalidNumbers(fields) => fields,
        }
    }
}
