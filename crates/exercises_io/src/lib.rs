//! Utilities for file input.

use std::{
    fs, io,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineCountError {
    #[error("Could not read {}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} is not valid UTF-8", .path.display())]
    Decoding {
        path: PathBuf,
        source: FromUtf8Error,
    },
}

/// Reads and returns the content of the specified text file.
pub fn read_text_file(file_path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(file_path)
}

/// Counts the meaningful lines in the UTF-8 text file at the given path.
///
/// A line is meaningful unless it is empty, consists only of whitespace or
/// starts with `#` once leading whitespace is removed.
///
/// # Errors
/// Returns [`LineCountError::Io`] if the file can not be opened or read and
/// [`LineCountError::Decoding`] if its content is not valid UTF-8.
pub fn meaningful_line_count(file_path: impl AsRef<Path>) -> Result<usize, LineCountError> {
    let file_path = file_path.as_ref();

    let bytes = fs::read(file_path).map_err(|source| LineCountError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| LineCountError::Decoding {
        path: file_path.to_path_buf(),
        source,
    })?;

    let count = count_meaningful_lines(&text);
    exercises_log::debug!(
        "Found {} meaningful lines in {}",
        count,
        file_path.display()
    );
    Ok(count)
}

/// Counts the meaningful lines in the given text (see
/// [`meaningful_line_count`]).
///
/// Lines may end with `\n`, `\r\n` or a lone `\r`.
pub fn count_meaningful_lines(text: &str) -> usize {
    // The empty piece between `\r` and `\n` is blank and never counted
    text.split(['\n', '\r'])
        .filter(|line| is_meaningful(line))
        .count()
}

fn is_meaningful(line: &str) -> bool {
    let line = line.trim_start();
    !line.is_empty() && !line.starts_with('#')
}

/// Reads the RON (Rusty Object Notation) file at the given path and
/// deserializes the contents into an object of type `T`.
#[cfg(feature = "ron")]
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    use anyhow::Context;

    let file_path = file_path.as_ref();

    let text = read_text_file(file_path)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    exercises_log::with_trace_logging!("Deserializing {}", file_path.display(); {
        ron::from_str::<T>(&text)
    })
    .map_err(anyhow::Error::from)
    .with_context(|| format!("Invalid syntax in {}", file_path.display()))
}
