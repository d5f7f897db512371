use std::io::BufRead;
use std::ops::Range;
use std::path::Path;

use log::debug;
use varanno_core::models::Interval;

use crate::errors::{RefSeqError, Result};
use crate::fasta::{ContigRecord, load_single_contig, parse_single_contig};

///
/// A hypothetical change to the reference, applied only to the copy returned
/// by [`SequenceStore::query_with_edit`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the bases of `interval` with `replacement` (same length).
    Substitution {
        interval: Interval,
        replacement: Vec<u8>,
    },
    /// Remove the bases of `interval`; the returned sequence gets shorter.
    Deletion { interval: Interval },
}

impl Edit {
    pub fn substitution<S: AsRef<[u8]>>(interval: Interval, replacement: S) -> Self {
        Edit::Substitution {
            interval,
            replacement: replacement.as_ref().to_vec(),
        }
    }

    pub fn deletion(interval: Interval) -> Self {
        Edit::Deletion { interval }
    }

    /// The genomic span touched by the edit
    pub fn interval(&self) -> Interval {
        match self {
            Edit::Substitution { interval, .. } => *interval,
            Edit::Deletion { interval } => *interval,
        }
    }
}

///
/// In-memory reference genome addressed by 1-based closed intervals.
///
/// Reads never mutate the buffer; the only way to change it is
/// [`SequenceStore::apply_changes`], which needs `&mut self`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStore {
    contig: String,
    sequence: Vec<u8>,
}

impl From<ContigRecord> for SequenceStore {
    fn from(record: ContigRecord) -> Self {
        SequenceStore {
            contig: record.name,
            sequence: record.sequence,
        }
    }
}

impl SequenceStore {
    ///
    /// Parse a single-contig FASTA held in memory.
    ///
    pub fn load(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(parse_single_contig(reader)?.into())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(load_single_contig(path)?.into())
    }

    /// Identifier of the contig, taken from the FASTA header
    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The whole buffer
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Translate a 1-based closed interval into a 0-based half-open range,
    /// rejecting anything outside the buffer.
    fn checked_range(&self, start: u32, end: u32) -> Result<Range<usize>> {
        if start < 1 || start > end || end as usize > self.sequence.len() {
            return Err(RefSeqError::Range {
                start,
                end,
                length: self.sequence.len(),
            });
        }
        Ok((start as usize - 1)..end as usize)
    }

    ///
    /// Get the bases of the closed interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`RefSeqError::Range`] when `start < 1`, `end > len` or `start > end`.
    /// Out-of-range queries are never clamped.
    ///
    pub fn query(&self, start: u32, end: u32) -> Result<&[u8]> {
        let range = self.checked_range(start, end)?;
        Ok(&self.sequence[range])
    }

    ///
    /// Get the bases of `[start, end]` with `edit` applied to the returned copy.
    ///
    /// The edit interval must lie inside the queried interval. Substitutions keep
    /// the length of the result; deletions shorten it by the deleted span.
    ///
    pub fn query_with_edit(&self, start: u32, end: u32, edit: &Edit) -> Result<Vec<u8>> {
        let bases = self.query(start, end)?;
        let query = Interval { start, end };

        let target = edit.interval();
        if target.start > target.end || !query.contains(&target) {
            return Err(RefSeqError::EditOutOfBounds {
                edit: target,
                query,
            });
        }

        // offsets of the edit relative to the returned slice
        let from = (target.start - start) as usize;
        let to = (target.end - start) as usize + 1;

        let mut edited = Vec::with_capacity(bases.len());
        edited.extend_from_slice(&bases[..from]);
        match edit {
            Edit::Substitution { interval, replacement } => {
                if replacement.len() != interval.len() {
                    return Err(RefSeqError::EditLengthMismatch {
                        expected: interval.len(),
                        found: replacement.len(),
                    });
                }
                edited.extend_from_slice(replacement);
            }
            Edit::Deletion { .. } => {}
        }
        edited.extend_from_slice(&bases[to..]);

        Ok(edited)
    }

    ///
    /// **This method mutates the store.**
    ///
    /// Overwrite one base per absolute (1-based) position. Every position is
    /// checked before anything is written, so a failing call leaves the buffer
    /// untouched.
    ///
    pub fn apply_changes(&mut self, changes: &[(u32, u8)]) -> Result<()> {
        for &(pos, _) in changes {
            self.checked_range(pos, pos)?;
        }

        for &(pos, base) in changes {
            self.sequence[pos as usize - 1] = base;
        }
        debug!("Applied {} changes to {}", changes.len(), self.contig);

        Ok(())
    }

    ///
    /// Clone the store and commit `changes` to the copy, producing an
    /// alternate reference while leaving `self` untouched.
    ///
    pub fn with_changes(&self, changes: &[(u32, u8)]) -> Result<SequenceStore> {
        let mut alternate = self.clone();
        alternate.apply_changes(changes)?;
        Ok(alternate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> SequenceStore {
        SequenceStore::load(">CONTIG_NAME\nATCGAATTTG\nAATGTA\n").unwrap()
    }

    fn interval(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[rstest]
    fn test_contig_and_len(store: SequenceStore) {
        assert_eq!(store.contig(), "CONTIG_NAME");
        assert_eq!(store.len(), 16);
        assert_eq!(store.is_empty(), false);
    }

    #[rstest]
    #[case(7, 16, "TTTGAATGTA")]
    #[case(1, 1, "A")]
    #[case(16, 16, "A")]
    #[case(1, 16, "ATCGAATTTGAATGTA")]
    fn test_query(store: SequenceStore, #[case] start: u32, #[case] end: u32, #[case] expected: &str) {
        let result = store.query(start, end).unwrap();
        assert_eq!(result, expected.as_bytes());
        assert_eq!(result.len(), (end - start + 1) as usize);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(5, 17)]
    #[case(6, 5)]
    fn test_query_out_of_range(store: SequenceStore, #[case] start: u32, #[case] end: u32) {
        assert!(matches!(
            store.query(start, end),
            Err(RefSeqError::Range { length: 16, .. })
        ));
    }

    #[rstest]
    fn test_query_with_substitution(store: SequenceStore) {
        let edit = Edit::substitution(interval(8, 9), "GC");
        let result = store.query_with_edit(7, 10, &edit).unwrap();
        assert_eq!(result, b"TGCG".to_vec());
        // the stored buffer is untouched
        assert_eq!(store.query(7, 10).unwrap(), b"TTTG");
    }

    #[rstest]
    fn test_substitution_with_original_content(store: SequenceStore) {
        let edit = Edit::substitution(interval(3, 6), store.query(3, 6).unwrap().to_vec());
        let result = store.query_with_edit(1, 10, &edit).unwrap();
        assert_eq!(result, store.query(1, 10).unwrap().to_vec());
    }

    #[rstest]
    fn test_query_with_deletion(store: SequenceStore) {
        let before = store.clone();
        let edit = Edit::deletion(interval(4, 6));
        let result = store.query_with_edit(1, 10, &edit).unwrap();
        assert_eq!(result, b"ATCTTTG".to_vec());
        assert_eq!(store, before);
    }

    #[rstest]
    fn test_deletion_at_query_edges(store: SequenceStore) {
        let result = store.query_with_edit(1, 4, &Edit::deletion(interval(1, 4))).unwrap();
        assert_eq!(result, Vec::<u8>::new());
        let result = store.query_with_edit(1, 4, &Edit::deletion(interval(4, 4))).unwrap();
        assert_eq!(result, b"ATC".to_vec());
    }

    #[rstest]
    fn test_substitution_length_mismatch(store: SequenceStore) {
        let edit = Edit::substitution(interval(8, 9), "G");
        assert!(matches!(
            store.query_with_edit(7, 10, &edit),
            Err(RefSeqError::EditLengthMismatch { expected: 2, found: 1 })
        ));
    }

    #[rstest]
    fn test_edit_outside_query(store: SequenceStore) {
        let edit = Edit::substitution(interval(6, 8), "CCC");
        assert!(matches!(
            store.query_with_edit(7, 10, &edit),
            Err(RefSeqError::EditOutOfBounds { .. })
        ));
        let edit = Edit::deletion(interval(10, 11));
        assert!(matches!(
            store.query_with_edit(7, 10, &edit),
            Err(RefSeqError::EditOutOfBounds { .. })
        ));
    }

    #[rstest]
    #[case(Edit::substitution(Interval { start: 9, end: 8 }, ""))]
    #[case(Edit::deletion(Interval { start: 10, end: 7 }))]
    fn test_reversed_edit_rejected(store: SequenceStore, #[case] edit: Edit) {
        let before = store.clone();
        assert!(matches!(
            store.query_with_edit(7, 10, &edit),
            Err(RefSeqError::EditOutOfBounds { .. })
        ));
        assert_eq!(store, before);
    }

    #[rstest]
    fn test_apply_changes(mut store: SequenceStore) {
        store.apply_changes(&[(1, b'G'), (16, b'C')]).unwrap();
        assert_eq!(store.query(1, 1).unwrap(), b"G");
        assert_eq!(store.query(16, 16).unwrap(), b"C");
        assert_eq!(store.query(2, 15).unwrap(), b"TCGAATTTGAATGT");
    }

    #[rstest]
    fn test_apply_no_changes(mut store: SequenceStore) {
        let before = store.clone();
        store.apply_changes(&[]).unwrap();
        assert_eq!(store, before);
    }

    #[rstest]
    fn test_apply_changes_is_all_or_nothing(mut store: SequenceStore) {
        let before = store.clone();
        let result = store.apply_changes(&[(1, b'G'), (17, b'C')]);
        assert!(matches!(result, Err(RefSeqError::Range { start: 17, .. })));
        assert_eq!(store, before);
    }

    #[rstest]
    fn test_with_changes_leaves_original(store: SequenceStore) {
        let alternate = store.with_changes(&[(5, b'T')]).unwrap();
        assert_eq!(alternate.query(5, 5).unwrap(), b"T");
        assert_eq!(store.query(5, 5).unwrap(), b"A");
        assert_eq!(alternate.contig(), store.contig());
    }
}
