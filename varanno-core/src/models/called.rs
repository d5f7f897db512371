use std::fmt::{self, Display};

use crate::errors::Result;
use crate::models::Interval;
use crate::utils::{parse_u32, required_field};

///
/// A variant anchored on the reference but not yet intersected with proteins:
/// `chrom start end id ref alt count`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalledVariant {
    pub chrom: String,
    pub interval: Interval,
    pub id: String,
    pub ref_allele: String,
    pub alt_allele: String,
    pub count: u32,
}

impl CalledVariant {
    /// Parse the first seven whitespace-delimited columns of a row.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let chrom = required_field(&fields, 0, "chrom", line)?;
        let start = parse_u32(required_field(&fields, 1, "start", line)?, "start")?;
        let end = parse_u32(required_field(&fields, 2, "end", line)?, "end")?;
        let id = required_field(&fields, 3, "id", line)?;
        let ref_allele = required_field(&fields, 4, "ref", line)?;
        let alt_allele = required_field(&fields, 5, "alt", line)?;
        let count = parse_u32(required_field(&fields, 6, "count", line)?, "count")?;

        Ok(CalledVariant {
            chrom: chrom.to_string(),
            interval: Interval::new(start, end)?,
            id: id.to_string(),
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
            count,
        })
    }

    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.interval.start,
            self.interval.end,
            self.id,
            self.ref_allele,
            self.alt_allele,
            self.count
        )
    }
}

impl Display for CalledVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
