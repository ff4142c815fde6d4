// src/files.rs
use std::fs;

use crate::args::Direction;
use crate::error::EncryptorError;

/// Derive the output filename: strip a leading `e_`/`d_` marker if present,
/// then prepend the prefix for the requested direction. Nothing else in the
/// name is touched.
pub fn derive_output_name(input: &str, direction: Direction) -> String {
    let stem = input
        .strip_prefix("e_")
        .or_else(|| input.strip_prefix("d_"))
        .unwrap_or(input);
    format!("{}{}", direction.prefix(), stem)
}

/// Read the whole file as raw bytes (no newline or encoding translation).
pub fn read_file(path: &str) -> Result<Vec<u8>, EncryptorError> {
    fs::read(path).map_err(|source| EncryptorError::InputFile {
        path: path.to_owned(),
        source,
    })
}

/// Create or truncate `path` and write the whole buffer to it.
pub fn write_file(path: &str, data: &[u8]) -> Result<(), EncryptorError> {
    fs::write(path, data).map_err(|source| EncryptorError::OutputFile {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_plain_names() {
        assert_eq!(derive_output_name("report.txt", Direction::Encrypt), "e_report.txt");
        assert_eq!(derive_output_name("report.txt", Direction::Decrypt), "d_report.txt");
    }

    #[test]
    fn strips_existing_markers_before_prefixing() {
        assert_eq!(derive_output_name("e_report.txt", Direction::Decrypt), "d_report.txt");
        assert_eq!(derive_output_name("d_report.txt", Direction::Encrypt), "e_report.txt");
        assert_eq!(derive_output_name("e_report.txt", Direction::Encrypt), "e_report.txt");
    }

    #[test]
    fn leaves_the_rest_of_the_name_alone() {
        // Only the two-character marker is special; everything else,
        // separators included, passes through.
        assert_eq!(derive_output_name("notes/e.txt", Direction::Encrypt), "e_notes/e.txt");
        assert_eq!(derive_output_name("ed_report.txt", Direction::Decrypt), "d_ed_report.txt");
    }

    #[test]
    fn read_missing_file_reports_input_error() {
        match read_file("no-such-file.txt") {
            Err(EncryptorError::InputFile { path, .. }) => assert_eq!(path, "no-such-file.txt"),
            other => panic!("expected InputFile error, got {:?}", other.map(|_| ())),
        }
    }
}
