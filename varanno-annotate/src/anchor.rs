//!
//! Anchoring of flank windows back onto reference coordinates.
//!
//! A flank lookup may return zero, one or several intervals. Every
//! (prev, next) pair is considered, and every pair satisfying the gap
//! condition is reported; picking between ambiguous anchors is left to the
//! count filter downstream.
//!
use log::{debug, warn};
use varanno_core::models::{CalledVariant, DELETION_ALLELE, Interval};
use varanno_refseq::{KmerIndex, SequenceStore};

use crate::errors::{AnnotationError, Result};
use crate::flanks::FlankRecord;

/// Cross product of all prev and next occurrences.
pub fn candidate_pairs(index: &KmerIndex, prev: &str, next: &str) -> Vec<(Interval, Interval)> {
    let prev_coords = index.coordinates_of(prev);
    let next_coords = index.coordinates_of(next);

    prev_coords
        .iter()
        .flat_map(|p| next_coords.iter().map(move |n| (*p, *n)))
        .collect()
}

/// Signed distance from the end of `prev` to the start of `next`.
#[inline]
fn gap(prev: &Interval, next: &Interval) -> i64 {
    next.start as i64 - prev.end as i64
}

///
/// Positions of an SNV lying between the two flanks: exactly one base sits
/// between them, so `next.start - prev.end == 2` and the variant is at
/// `prev.end + 1`.
///
pub fn anchor_snv(index: &KmerIndex, prev: &str, next: &str) -> Vec<u32> {
    candidate_pairs(index, prev, next)
        .into_iter()
        .filter(|(p, n)| gap(p, n) == 2)
        .map(|(p, _)| p.end + 1)
        .collect()
}

///
/// Spans deleted between the two flanks: `prev.end + 1 ..= next.start - 1`.
/// Gaps shorter than two bases are discarded.
///
pub fn anchor_deletion(index: &KmerIndex, prev: &str, next: &str) -> Vec<Interval> {
    candidate_pairs(index, prev, next)
        .into_iter()
        .filter(|(p, n)| gap(p, n) > 1)
        .filter_map(|(p, n)| {
            let start = p.end + 1;
            let end = n.start - 1;
            (start < end).then_some(Interval { start, end })
        })
        .collect()
}

fn report_candidates(record: &FlankRecord, found: usize) {
    match found {
        0 => warn!(
            "{}: no anchor found for flanks {} / {}",
            record.id,
            record.prev(),
            record.next()
        ),
        1 => {}
        n => warn!("{}: {} candidate anchors, reporting all", record.id, n),
    }
}

///
/// Call SNVs from an SNV-shaped flank row. Each candidate position is reported
/// with its reference base read from the store.
///
pub fn discover_snvs(
    record: &FlankRecord,
    index: &KmerIndex,
    store: &SequenceStore,
) -> Result<Vec<CalledVariant>> {
    let alt = record.snv_base().ok_or_else(|| {
        AnnotationError::InvalidFlankRecord(format!("{}: no deviant window", record.id))
    })?;

    let positions = anchor_snv(index, record.prev(), record.next());
    report_candidates(record, positions.len());

    let mut called = Vec::with_capacity(positions.len());
    for pos in positions {
        let reference = store.query(pos, pos)?[0];
        if reference == alt {
            warn!(
                "{}: alternate base {} at {} matches the reference",
                record.id, alt as char, pos
            );
        }
        debug!("{}: SNV {}{}>{}", record.id, pos, reference as char, alt as char);

        called.push(CalledVariant {
            chrom: store.contig().to_string(),
            interval: Interval::point(pos)?,
            id: record.id.clone(),
            ref_allele: (reference as char).to_string(),
            alt_allele: (alt as char).to_string(),
            count: record.count,
        });
    }
    Ok(called)
}

///
/// Call deletions from a deletion-shaped flank row. The deleted bases are
/// reported as the reference allele and `DEL` as the alternate.
///
pub fn discover_deletions(
    record: &FlankRecord,
    index: &KmerIndex,
    store: &SequenceStore,
) -> Result<Vec<CalledVariant>> {
    let spans = anchor_deletion(index, record.prev(), record.next());
    report_candidates(record, spans.len());

    spans
        .into_iter()
        .map(|span| -> Result<CalledVariant> {
            let deleted = store.query(span.start, span.end)?;
            debug!("{}: deletion {}", record.id, span);
            Ok(CalledVariant {
                chrom: store.contig().to_string(),
                interval: span,
                id: record.id.clone(),
                ref_allele: String::from_utf8_lossy(deleted).into_owned(),
                alt_allele: DELETION_ALLELE.to_string(),
                count: record.count,
            })
        })
        .collect()
}
