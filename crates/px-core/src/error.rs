use thiserror::Error;

pub type PxResult<T> = Result<T, PxError>;

#[derive(Error, Debug)]
pub enum PxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
