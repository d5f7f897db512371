use std::io::BufRead;
use std::path::Path;

use log::info;
use varanno_core::utils::get_dynamic_reader;

use crate::consts::FASTA_HEADER_PREFIX;
use crate::errors::{RefSeqError, Result};

/// A single FASTA record: the whole reference genome as one contig.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContigRecord {
    pub name: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

/// Parse a FASTA header line into name and optional description.
///
/// The name is everything up to the first whitespace; the description is
/// everything after (trimmed). The leading `>` is stripped if present.
///
/// # Examples
///
/// ```
/// use varanno_refseq::parse_fasta_header;
///
/// let (name, desc) = parse_fasta_header(">NC_045512.2 Severe acute respiratory syndrome coronavirus 2");
/// assert_eq!(name, "NC_045512.2");
/// assert_eq!(desc.as_deref(), Some("Severe acute respiratory syndrome coronavirus 2"));
/// ```
pub fn parse_fasta_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    let header = header.strip_prefix(FASTA_HEADER_PREFIX).unwrap_or(header);
    match header.split_once(char::is_whitespace) {
        Some((id, desc)) => (id.to_string(), Some(desc.trim().to_string())),
        None => (header.to_string(), None),
    }
}

#[inline]
fn is_sequence_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'-' || b == b'*'
}

///
/// Read exactly one FASTA record: a header line followed by one or more
/// sequence lines, concatenated with all whitespace removed.
///
/// Fails with [`RefSeqError::Format`] when the header is missing or has no
/// identifier, when the body is empty, when a second record starts, or when
/// the body holds characters that are not sequence letters.
///
pub fn parse_single_contig<R: BufRead>(reader: R) -> Result<ContigRecord> {
    let mut header: Option<(String, Option<String>)> = None;
    let mut sequence: Vec<u8> = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(FASTA_HEADER_PREFIX) {
            if header.is_some() {
                return Err(RefSeqError::Format(format!(
                    "found a second header on line {}; only single-contig references are supported",
                    line_num + 1
                )));
            }
            let (name, description) = parse_fasta_header(&line);
            if name.is_empty() {
                return Err(RefSeqError::Format(format!(
                    "header on line {} has no contig identifier",
                    line_num + 1
                )));
            }
            header = Some((name, description));
            continue;
        }

        if header.is_none() {
            return Err(RefSeqError::Format(
                "no header line found before sequence data".to_string(),
            ));
        }

        for b in line.bytes().filter(|b| !b.is_ascii_whitespace()) {
            if !is_sequence_byte(b) {
                return Err(RefSeqError::Format(format!(
                    "unexpected character {:?} on line {}",
                    b as char,
                    line_num + 1
                )));
            }
            sequence.push(b);
        }
    }

    let (name, description) =
        header.ok_or_else(|| RefSeqError::Format("no header line found".to_string()))?;

    if sequence.is_empty() {
        return Err(RefSeqError::Format(format!(
            "contig {} has an empty sequence",
            name
        )));
    }

    // coordinates are carried as u32 throughout
    if u32::try_from(sequence.len()).is_err() {
        return Err(RefSeqError::Format(format!(
            "contig {} is too long ({} bases)",
            name,
            sequence.len()
        )));
    }

    Ok(ContigRecord {
        name,
        description,
        sequence,
    })
}

///
/// Load a single-contig FASTA from disk; `.gz` files are decompressed on the fly.
///
pub fn load_single_contig<P: AsRef<Path>>(path: P) -> Result<ContigRecord> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path).map_err(|e| RefSeqError::Read {
        path: path.display().to_string(),
        message: format!("{:#}", e),
    })?;

    let record = parse_single_contig(reader)?;
    info!(
        "Loaded contig {} ({} bases) from {}",
        record.name,
        record.sequence.len(),
        path.display()
    );

    Ok(record)
}
