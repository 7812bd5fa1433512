use crate::error::BoardError;

pub type BoardResult<T> = Result<T, BoardError>;
