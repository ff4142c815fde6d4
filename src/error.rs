// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncryptorError {
    #[error("expected 2 arguments: a filename and a direction")]
    ArgumentCount,

    #[error("invalid argument: {0}")]
    InvalidDirection(String),

    #[error("invalid file type: {0} - please use .txt files")]
    InvalidFileType(String),

    #[error("cannot open input file '{path}': {source}")]
    InputFile { path: String, source: io::Error },

    #[error("cannot open output file '{path}': {source}")]
    OutputFile { path: String, source: io::Error },
}
