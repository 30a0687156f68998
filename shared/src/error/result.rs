use super::FractalError;

pub type FractalResult<T> = Result<T, FractalError>;
