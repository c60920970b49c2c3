use std::io;
use std::result;

use calamine::XlsxError;
use thiserror::Error;

pub type Result<T> = result::Result<T, StoresGenError>;

#[derive(Error, Debug)]
pub enum StoresGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("SheetNotFound: {0:?}")]
    SheetNotFound(String),
    #[error("ColumnNotFound: {0:?}")]
    ColumnNotFound(String),
    #[error("EmptyColumn: {0:?}")]
    EmptyColumn(String),
    #[error("InvalidInput: {0:?}")]
    InvalidInput(String),
    #[error("WorkbookError: {0:?}")]
    WorkbookError(#[from] XlsxError),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("IOError: {0:?}")]
    IOError(#[from] io::Error),
}
