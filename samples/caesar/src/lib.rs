//! Caesar cipher over whole files, assembled from `Either` validations.
//!
//! Each command-line argument is validated on its own into an
//! `Either<CaesarError, _>`. The validated pieces are fed to a curried
//! [`encode_file`] through `apply`, so the file is only touched when every
//! argument is valid. `apply` reports the error of its argument first, so
//! when several arguments are invalid the last one is reported.
//!
//! # Examples
//!
//! ```
//! use caesar::{Operation, transform};
//!
//! let secret = transform(Operation::Encode, 3, b"abc");
//! assert_eq!(secret, b"def");
//! assert_eq!(transform(Operation::Decode, 3, &secret), b"abc");
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use yafl::compose::id;
use yafl::curry;
use yafl::data::{Either, either};

/// Prefix of the file written next to the input.
pub const OUTPUT_PREFIX: &str = "acc_";

/// Whether bytes are shifted up or down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Shift every byte up by the seed.
    Encode,
    /// Shift every byte down by the seed.
    Decode,
}

/// Errors from validating arguments or processing the file.
#[derive(Debug, Error)]
pub enum CaesarError {
    /// The operation flag is not one of `-e`, `--encode`, `-d`, `--decode`.
    #[error("unknown operation {0:?}, expected -e, --encode, -d or --decode")]
    UnknownOperation(String),

    /// The seed is not an integer.
    #[error("seed {0:?} is not an integer")]
    SeedNotInteger(String),

    /// The seed is an integer outside `0..=255`.
    #[error("seed {0} is outside 0..=255")]
    SeedOutOfRange(i64),

    /// The input path has no file name to derive the output name from.
    #[error("{} has no file name", .0.display())]
    InvalidPath(PathBuf),

    /// The input file could not be read.
    #[error("cannot read {}", .path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write {}", .path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Parses the operation flag.
pub fn validate_operation(flag: &str) -> Either<CaesarError, Operation> {
    match flag {
        "-e" | "--encode" => either::ok(Operation::Encode),
        "-d" | "--decode" => either::ok(Operation::Decode),
        unknown => either::error(CaesarError::UnknownOperation(unknown.to_string())),
    }
}

/// Parses the seed, which must be an integer in `0..=255`.
pub fn validate_seed(text: &str) -> Either<CaesarError, u8> {
    let parsed: Either<CaesarError, i64> = text
        .trim()
        .parse::<i64>()
        .map_err(|_| CaesarError::SeedNotInteger(text.to_string()))
        .into();

    parsed.bind(|seed| {
        u8::try_from(seed).map_or_else(
            |_| either::error(CaesarError::SeedOutOfRange(seed)),
            either::ok,
        )
    })
}

/// Shifts every byte by `seed % 255`, wrapping around at the byte boundary.
///
/// A seed of 0 or 255 leaves the input unchanged.
pub fn transform(operation: Operation, seed: u8, bytes: &[u8]) -> Vec<u8> {
    let shift = seed % u8::MAX;
    bytes
        .iter()
        .map(|&byte| match operation {
            Operation::Encode => byte.wrapping_add(shift),
            Operation::Decode => byte.wrapping_sub(shift),
        })
        .collect()
}

/// The path of the file written for `input`: `acc_<name>` in the same directory.
pub fn output_path(input: &Path) -> Either<CaesarError, PathBuf> {
    match input.file_name() {
        Some(name) => {
            let mut output_name = std::ffi::OsString::from(OUTPUT_PREFIX);
            output_name.push(name);
            either::ok(input.with_file_name(output_name))
        }
        None => either::error(CaesarError::InvalidPath(input.to_path_buf())),
    }
}

/// Transforms the whole file at `path` and writes the result next to it.
///
/// Returns the path of the written file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn encode_file(operation: Operation, seed: u8, path: PathBuf) -> Either<CaesarError, PathBuf> {
    output_path(&path).bind(|output| {
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(source) => return either::error(CaesarError::Read { path, source }),
        };
        debug!(?operation, seed, bytes = contents.len(), "transforming file");

        match fs::write(&output, transform(operation, seed, &contents)) {
            Ok(()) => either::ok(output),
            Err(source) => either::error(CaesarError::Write { path: output, source }),
        }
    })
}

/// Validates the raw arguments and, when all are valid, processes the file.
///
/// When several arguments are invalid, the last one is reported: a bad seed
/// hides an unknown operation.
///
/// # Examples
///
/// ```
/// use caesar::{CaesarError, run};
/// use std::path::Path;
///
/// let outcome = run("--rot13", "300", Path::new("notes.txt"));
/// assert!(matches!(outcome.error(), Ok(CaesarError::SeedOutOfRange(300))));
///
/// let outcome = run("--rot13", "3", Path::new("notes.txt"));
/// assert!(matches!(outcome.error(), Ok(CaesarError::UnknownOperation(_))));
/// ```
pub fn run(operation: &str, seed: &str, path: &Path) -> Either<CaesarError, PathBuf> {
    either::ok(curry!(encode_file, 3))
        .apply(validate_operation(operation))
        .apply(validate_seed(seed))
        .apply_value(path.to_path_buf())
        .bind(id)
}
