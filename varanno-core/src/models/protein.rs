use std::fmt::{self, Display};

use crate::errors::Result;
use crate::models::Interval;
use crate::utils::{parse_u32, required_field};

///
/// A coding region of the reference: the span translated into one protein product.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProteinRegion {
    pub chrom: String,
    pub interval: Interval,
    pub gene: String,
    pub name: String,
}

impl ProteinRegion {
    ///
    /// Parse a protein table row: `contig  start  end  gene  product`.
    ///
    /// Coordinates are taken as 1-based and closed, as written by the
    /// protein-region extraction step.
    ///
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end().split('\t').collect();

        let chrom = required_field(&fields, 0, "contig", line)?;
        let start = parse_u32(required_field(&fields, 1, "start", line)?, "start")?;
        let end = parse_u32(required_field(&fields, 2, "end", line)?, "end")?;
        let gene = required_field(&fields, 3, "gene", line)?;
        let name = required_field(&fields, 4, "product", line)?;

        Ok(ProteinRegion {
            chrom: chrom.to_string(),
            interval: Interval::new(start, end)?,
            gene: gene.to_string(),
            name: name.to_string(),
        })
    }

    /// Whether the region spans a whole number of codons
    pub fn is_codon_aligned(&self) -> bool {
        self.interval.len() % 3 == 0
    }

    ///
    /// Get file string of the region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.chrom, self.interval.start, self.interval.end, self.gene, self.name
        )
    }
}

impl Display for ProteinRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_from_line() {
        let region =
            ProteinRegion::from_line("NC_045512.2\t21563\t25384\tS\tsurface glycoprotein").unwrap();
        assert_eq!(region.chrom, "NC_045512.2");
        assert_eq!(region.interval, Interval { start: 21563, end: 25384 });
        assert_eq!(region.gene, "S");
        assert_eq!(region.name, "surface glycoprotein");
        assert!(region.is_codon_aligned());
    }

    #[rstest]
    fn test_misaligned() {
        let region = ProteinRegion::from_line("chr\t1\t10\tG\tP").unwrap();
        assert!(!region.is_codon_aligned());
    }

    #[rstest]
    #[case("chr\t1\t10\tG")]
    #[case("chr\tone\t10\tG\tP")]
    #[case("chr\t11\t10\tG\tP")]
    fn test_bad_rows(#[case] line: &str) {
        assert!(ProteinRegion::from_line(line).is_err());
    }
}
