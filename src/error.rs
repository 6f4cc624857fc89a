use std::collections::TryReserveError;

#[derive(thiserror::Error, Debug)]
pub enum VecError {
    #[error("Index `{0}` is too large to address")]
    IndexOverflow(usize),

    #[error("Capacity `{0}` can't be doubled without overflowing")]
    CapacityOverflow(usize),

    #[error("Couldn't allocate: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
