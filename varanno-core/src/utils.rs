use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::errors::RecordError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

/// Get a buffered writer for a file, or stdout when no path is given.
pub fn get_dynamic_writer(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    Ok(BufWriter::new(sink))
}

///
/// Fetch a required column from a split line.
///
pub fn required_field<'a>(
    fields: &[&'a str],
    index: usize,
    field: &'static str,
    line: &str,
) -> std::result::Result<&'a str, RecordError> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| RecordError::MissingField {
            field,
            line: line.to_string(),
        })
}

///
/// Parse a coordinate or count column.
///
pub fn parse_u32(value: &str, field: &'static str) -> std::result::Result<u32, RecordError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| RecordError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}
