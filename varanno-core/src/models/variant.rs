use std::fmt::{self, Display};

use crate::errors::Result;
use crate::models::{Interval, ProteinRegion};
use crate::utils::{parse_u32, required_field};

/// Alternate allele written for deletions by the discovery step.
pub const DELETION_ALLELE: &str = "DEL";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum VariantKind {
    /// One or more bases replaced by the same number of bases.
    Substitution,
    /// The bases of the interval removed.
    Deletion,
}

///
/// One row of an intersected variant table: the variant itself plus the
/// protein region it falls in.
///
/// Rows are tab-delimited with the columns
/// `chrom start end id ref alt count prot_chrom prot_start prot_end gene prot_name`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub chrom: String,
    pub interval: Interval,
    pub id: String,
    pub ref_allele: String,
    pub alt_allele: String,
    pub count: u32,
    pub protein: ProteinRegion,
}

impl Variant {
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();

        let chrom = required_field(&fields, 0, "chrom", line)?;
        let start = parse_u32(required_field(&fields, 1, "start", line)?, "start")?;
        let end = parse_u32(required_field(&fields, 2, "end", line)?, "end")?;
        let id = required_field(&fields, 3, "id", line)?;
        let ref_allele = required_field(&fields, 4, "ref", line)?;
        let alt_allele = required_field(&fields, 5, "alt", line)?;
        let count = parse_u32(required_field(&fields, 6, "count", line)?, "count")?;
        let prot_chrom = required_field(&fields, 7, "prot_chrom", line)?;
        let prot_start = parse_u32(required_field(&fields, 8, "prot_start", line)?, "prot_start")?;
        let prot_end = parse_u32(required_field(&fields, 9, "prot_end", line)?, "prot_end")?;
        let gene = required_field(&fields, 10, "gene", line)?;
        let prot_name = required_field(&fields, 11, "prot_name", line)?;

        Ok(Variant {
            chrom: chrom.to_string(),
            interval: Interval::new(start, end)?,
            id: id.to_string(),
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
            count,
            protein: ProteinRegion {
                chrom: prot_chrom.to_string(),
                interval: Interval::new(prot_start, prot_end)?,
                gene: gene.to_string(),
                name: prot_name.to_string(),
            },
        })
    }

    pub fn kind(&self) -> VariantKind {
        if self.alt_allele == DELETION_ALLELE {
            VariantKind::Deletion
        } else {
            VariantKind::Substitution
        }
    }

    ///
    /// The leading columns of an annotation row:
    /// `chrom start end id ref alt count gene prot_name`
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.interval.start,
            self.interval.end,
            self.id,
            self.ref_allele,
            self.alt_allele,
            self.count,
            self.protein.gene,
            self.protein.name
        )
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
