use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap as HashMap;
use log::info;
use varanno_core::utils::{get_dynamic_reader, parse_u32, required_field};

use crate::consts::CLADE_SEPARATOR;
use crate::errors::Result;

///
/// Clades defined by a (site, alternate allele) pair.
///
/// Lookups of an unknown pair give an empty list.
///
#[derive(Debug, Clone, Default)]
pub struct CladeTable {
    clades: HashMap<(u32, String), Vec<String>>,
}

impl CladeTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Read a tab-separated `clade <unused> site alt` table. The first line is
    /// a header.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = CladeTable::new();

        for line in reader.lines().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.trim_end().split('\t').collect();
            let clade = required_field(&fields, 0, "clade", &line)?;
            let site = parse_u32(required_field(&fields, 2, "site", &line)?, "site")?;
            let alt = required_field(&fields, 3, "alt", &line)?;
            table.insert(site, alt, clade);
        }

        Ok(table)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path)
            .map_err(|e| std::io::Error::other(format!("{}: {:#}", path.display(), e)))?;
        let table = Self::from_reader(reader)?;
        info!("Loaded {} clade-defining mutations", table.len());
        Ok(table)
    }

    pub fn insert(&mut self, site: u32, alt: &str, clade: &str) {
        self.clades
            .entry((site, alt.to_string()))
            .or_default()
            .push(clade.to_string());
    }

    pub fn lookup(&self, site: u32, alt: &str) -> &[String] {
        self.clades
            .get(&(site, alt.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct (site, alt) keys.
    pub fn len(&self) -> usize {
        self.clades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clades.is_empty()
    }

    ///
    /// Append the `:`-joined clades of an SNV row (`chrom pos pos id ref alt ...`)
    /// as a final column. Rows with no matching clade get an empty column.
    ///
    pub fn annotate_line(&self, line: &str) -> Result<String> {
        let line = line.trim_end();
        let fields: Vec<&str> = line.split('\t').collect();
        let site = parse_u32(required_field(&fields, 1, "start", line)?, "start")?;
        let alt = required_field(&fields, 5, "alt", line)?;

        Ok(format!(
            "{}\t{}",
            line,
            self.lookup(site, alt).join(CLADE_SEPARATOR)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use crate::errors::AnnotationError;

    const CLADES: &str = "clade\tgene\tsite\talt\n\
                          20A\tnuc\t23403\tG\n\
                          20B\tnuc\t28881\tA\n\
                          20C\tnuc\t23403\tG\n";

    #[fixture]
    fn table() -> CladeTable {
        CladeTable::from_reader(Cursor::new(CLADES)).unwrap()
    }

    #[rstest]
    fn test_lookup(table: CladeTable) {
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(23403, "G"), ["20A", "20C"]);
        assert_eq!(table.lookup(28881, "A"), ["20B"]);
    }

    #[rstest]
    #[case(23403, "T")]
    #[case(1, "G")]
    fn test_lookup_default(table: CladeTable, #[case] site: u32, #[case] alt: &str) {
        assert!(table.lookup(site, alt).is_empty());
    }

    #[rstest]
    fn test_annotate_line(table: CladeTable) {
        assert_eq!(
            table
                .annotate_line("MN908947.3\t23403\t23403\tr1\tA\tG\t40\n")
                .unwrap(),
            "MN908947.3\t23403\t23403\tr1\tA\tG\t40\t20A:20C"
        );
        assert_eq!(
            table
                .annotate_line("MN908947.3\t100\t100\tr2\tC\tT\t3")
                .unwrap(),
            "MN908947.3\t100\t100\tr2\tC\tT\t3\t"
        );
    }

    #[rstest]
    fn test_annotate_short_line(table: CladeTable) {
        assert!(matches!(
            table.annotate_line("MN908947.3\t100"),
            Err(AnnotationError::Record(_))
        ));
    }
}
