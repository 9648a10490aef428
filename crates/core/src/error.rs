use thiserror::Error;

use crate::model::{BankError, ResponseError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
