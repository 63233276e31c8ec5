use crate::util::error::SensorError;
use std::{fs, io::Read, path::Path};

/// Read a pseudo-file and parse exactly one integer value from it
///
/// cpufreq and thermal files hold a single number plus a line terminator, so
/// the first whitespace-delimited token is authoritative. The handle is
/// scoped inside the call and released on every exit path.
///
/// # Arguments
///
/// * `path` - The pseudo-file to read
///
/// # Returns
///
/// Returns the parsed integer in whatever milli-unit the file uses
///
/// # Errors
///
/// Returns a `SensorError` variant based on the specific error:
/// - `SensorError::ReadError` if the file cannot be opened or read
/// - `SensorError::ParseError` if the content holds no integer token
pub fn read_integer(path: impl AsRef<Path>) -> Result<i64, SensorError> {
    let p = path.as_ref();
    let content = fs::read_to_string(p)
        .map_err(|e| SensorError::ReadError(format!("{}: {e}", p.display())))?;

    let token = content
        .split_whitespace()
        .next()
        .ok_or_else(|| SensorError::ParseError(format!("{}: empty file", p.display())))?;

    token
        .parse::<i64>()
        .map_err(|_| SensorError::ParseError(format!("{}: '{token}'", p.display())))
}

/// Read the first line of a pseudo-file, capped at `limit` bytes
///
/// The line ends at the first newline or NUL, whichever comes first;
/// firmware strings such as the device-tree model are NUL-terminated rather
/// than newline-terminated. The byte cap keeps a malformed pseudo-file from
/// feeding us unbounded data.
///
/// # Arguments
///
/// * `path` - The pseudo-file to read
/// * `limit` - Maximum number of bytes to pull from the file
///
/// # Returns
///
/// Returns the first line with surrounding whitespace stripped
///
/// # Errors
///
/// Returns `SensorError::ReadError` if the file cannot be opened or read
pub fn read_first_line(path: impl AsRef<Path>, limit: u64) -> Result<String, SensorError> {
    let p = path.as_ref();
    let file =
        fs::File::open(p).map_err(|e| SensorError::ReadError(format!("{}: {e}", p.display())))?;

    let mut buf = Vec::new();
    file.take(limit)
        .read_to_end(&mut buf)
        .map_err(|e| SensorError::ReadError(format!("{}: {e}", p.display())))?;

    let end = buf
        .iter()
        .position(|&b| b == b'\n' || b == b'\0')
        .unwrap_or(buf.len());

    Ok(String::from_utf8_lossy(&buf[..end]).trim().to_string())
}
