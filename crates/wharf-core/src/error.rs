use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("{provider} project identifier requires {expected} values, got {found}")]
    WrongArity {
        provider: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{provider} project identifier value {index} is empty")]
    EmptyValue {
        provider: &'static str,
        index: usize,
    },
}
