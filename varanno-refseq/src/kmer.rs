use std::path::Path;

use fxhash::FxHashMap as HashMap;
use log::info;
use varanno_core::models::Interval;

use crate::errors::{RefSeqError, Result};
use crate::fasta::{load_single_contig, parse_single_contig};
use crate::store::SequenceStore;

///
/// Every window of `window_length` bases in the reference, mapped to all the
/// 1-based closed intervals where it occurs.
///
/// Identical windows can recur (low-complexity or repeated regions), so a
/// lookup yields zero, one or many intervals. The index is built once and is
/// read-only afterwards.
///
#[derive(Debug, Clone)]
pub struct KmerIndex {
    contig: String,
    window_length: usize,
    coordinates: HashMap<Vec<u8>, Vec<Interval>>,
    entries: usize,
}

impl KmerIndex {
    ///
    /// Build the index from single-contig FASTA text.
    ///
    /// # Arguments
    ///
    /// - reference_text: FASTA header plus sequence lines
    /// - window_length: size of the sliding window (see [`crate::DEFAULT_WINDOW_LENGTH`])
    ///
    pub fn build(reference_text: &str, window_length: usize) -> Result<Self> {
        let record = parse_single_contig(reference_text.as_bytes())?;
        Self::from_sequence(record.name, &record.sequence, window_length)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, window_length: usize) -> Result<Self> {
        let record = load_single_contig(path)?;
        Self::from_sequence(record.name, &record.sequence, window_length)
    }

    /// Index the buffer currently held by `store`.
    pub fn from_store(store: &SequenceStore, window_length: usize) -> Result<Self> {
        Self::from_sequence(store.contig().to_string(), store.sequence(), window_length)
    }

    fn from_sequence(contig: String, sequence: &[u8], window_length: usize) -> Result<Self> {
        if window_length == 0 {
            return Err(RefSeqError::InvalidWindowLength(window_length));
        }

        let mut coordinates: HashMap<Vec<u8>, Vec<Interval>> = HashMap::default();
        let mut entries = 0;

        // one pass, step 1; a reference shorter than the window yields no entries
        for (i, window) in sequence.windows(window_length).enumerate() {
            let interval = Interval {
                start: (i + 1) as u32,
                end: (i + window_length) as u32,
            };
            coordinates.entry(window.to_vec()).or_default().push(interval);
            entries += 1;
        }

        info!(
            "Indexed {} windows of length {} ({} distinct) on {}",
            entries,
            window_length,
            coordinates.len(),
            contig
        );

        Ok(KmerIndex {
            contig,
            window_length,
            coordinates,
            entries,
        })
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Number of distinct windows
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Number of (window, interval) entries; one per sliding position.
    pub fn num_entries(&self) -> usize {
        self.entries
    }

    ///
    /// All occurrences of `window`, in reference order. An absent window
    /// (including one of the wrong length) gives an empty slice.
    ///
    pub fn coordinates_of<K: AsRef<[u8]>>(&self, window: K) -> &[Interval] {
        self.coordinates
            .get(window.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    ///
    /// Every window occurring more than once, with its intervals, ordered by
    /// the window's first occurrence.
    ///
    pub fn report_non_unique(&self) -> Vec<(&[u8], &[Interval])> {
        let mut repeated: Vec<(&[u8], &[Interval])> = self
            .coordinates
            .iter()
            .filter(|(_, intervals)| intervals.len() > 1)
            .map(|(window, intervals)| (window.as_slice(), intervals.as_slice()))
            .collect();
        repeated.sort_by_key(|(_, intervals)| intervals[0].start);
        repeated
    }
}
