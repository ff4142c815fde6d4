// src/args.rs
use clap::Parser;

use crate::error::EncryptorError;

#[derive(Parser)]
#[command(name = "encryptor", version, about)]
struct Cli {
    /// File to transform (must end in .txt)
    filename: String,

    /// Direction: -e encrypt, -d decrypt
    #[arg(allow_hyphen_values = true)]
    direction: String,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Filename prefix marking which transform produced a file.
    pub fn prefix(self) -> &'static str {
        match self {
            Direction::Encrypt => "e_",
            Direction::Decrypt => "d_",
        }
    }
}

pub struct Args {
    pub filename: String,
    pub direction: Direction,
}

impl Args {
    pub fn arguments<I>(itr: I) -> Result<Self, EncryptorError>
    where
        I: Iterator<Item = String>,
    {
        let cli = Cli::try_parse_from(itr).map_err(|_| EncryptorError::ArgumentCount)?;

        let direction = match cli.direction.as_str() {
            "-e" => Direction::Encrypt,
            "-d" => Direction::Decrypt,
            other => return Err(EncryptorError::InvalidDirection(other.to_owned())),
        };

        // Suffix check instead of fixed-offset slicing, so short names
        // ("a", ".tx") are rejected rather than panicking.
        if !cli.filename.ends_with(".txt") {
            return Err(EncryptorError::InvalidFileType(cli.filename));
        }

        Ok(Args {
            filename: cli.filename,
            direction,
        })
    }
}
