use log::debug;
use varanno_core::models::{ProteinRegion, Variant, VariantKind};
use varanno_refseq::{Edit, SequenceStore};

use crate::amino::{AminoAcid, AminoAcidChange, change_at, format_changes, pairwise_changes};
use crate::codon::CodonTable;
use crate::errors::{AnnotationError, Result};

///
/// 0-based index of the codon holding `position`, counted from the first base
/// of the protein region. Both coordinates are 1-based; a position before the
/// region gives `None`.
///
#[inline]
pub fn amino_acid_index(protein_start: u32, position: u32) -> Option<usize> {
    position
        .checked_sub(protein_start)
        .map(|offset| (offset / 3) as usize)
}

///
/// Computes amino-acid consequences of variants against one reference.
///
/// Every translation goes through the [`CodonTable`] handed in at construction;
/// hypothetical edits are applied with [`SequenceStore::query_with_edit`], so
/// the reference is never modified.
///
pub struct VariantAnnotator<'a, C: CodonTable> {
    store: &'a SequenceStore,
    codons: C,
    validate_frame: bool,
}

impl<'a, C: CodonTable> VariantAnnotator<'a, C> {
    pub fn new(store: &'a SequenceStore, codons: C) -> Self {
        VariantAnnotator {
            store,
            codons,
            validate_frame: true,
        }
    }

    /// Reject (or accept) protein regions that are not a whole number of codons.
    pub fn with_frame_validation(mut self, validate_frame: bool) -> Self {
        self.validate_frame = validate_frame;
        self
    }

    pub fn store(&self) -> &SequenceStore {
        self.store
    }

    fn check_frame(&self, region: &ProteinRegion) -> Result<()> {
        if self.validate_frame && !region.is_codon_aligned() {
            return Err(AnnotationError::Frame {
                region: region.interval,
                length: region.interval.len(),
            });
        }
        Ok(())
    }

    /// Translate the untouched protein region.
    pub fn translate_region(&self, region: &ProteinRegion) -> Result<Vec<AminoAcid>> {
        self.check_frame(region)?;
        let bases = self
            .store
            .query(region.interval.start, region.interval.end)?;
        Ok(self.codons.translate(bases))
    }

    /// Translate the protein region with `edit` applied.
    pub fn translate_edited_region(
        &self,
        region: &ProteinRegion,
        edit: &Edit,
    ) -> Result<Vec<AminoAcid>> {
        self.check_frame(region)?;
        let bases =
            self.store
                .query_with_edit(region.interval.start, region.interval.end, edit)?;
        Ok(self.codons.translate(&bases))
    }

    ///
    /// Annotate a substitution (single base or block) against its protein.
    ///
    /// Only the codon holding the variant's first base is compared. Returns
    /// `Ok(None)` when the residue is unchanged.
    ///
    pub fn annotate_snv(&self, variant: &Variant) -> Result<Option<AminoAcidChange>> {
        let region = &variant.protein;
        let index = amino_acid_index(region.interval.start, variant.interval.start)
            .filter(|_| region.interval.contains_position(variant.interval.start))
            .ok_or(AnnotationError::VariantOutsideRegion {
                variant: variant.interval,
                region: region.interval,
            })?;
        let edit = Edit::substitution(variant.interval, variant.alt_allele.as_bytes());

        let reference = self.translate_region(region)?;
        let alternate = self.translate_edited_region(region, &edit)?;

        let change = change_at(&reference, &alternate, index)?;
        match &change {
            Some(change) => debug!("{} {}: {}", variant.id, region.gene, change),
            None => debug!("{} {}: synonymous", variant.id, region.gene),
        }
        Ok(change)
    }

    ///
    /// Annotate a deletion against its protein.
    ///
    /// The part of the deletion inside the region is removed and the shortened
    /// region translated. In-frame deletions report the deleted residues (and a
    /// merged codon when the deletion starts mid-codon); frameshifts report
    /// every downstream residue that differs, with [`AminoAcid::Absent`] past
    /// the end of the shorter protein.
    ///
    pub fn annotate_deletion(&self, variant: &Variant) -> Result<Vec<AminoAcidChange>> {
        let region = &variant.protein;
        let deleted = variant.interval.intersect(&region.interval).ok_or(
            AnnotationError::VariantOutsideRegion {
                variant: variant.interval,
                region: region.interval,
            },
        )?;
        if deleted != variant.interval {
            debug!(
                "{}: deletion {} clipped to {} within {}",
                variant.id, variant.interval, deleted, region.gene
            );
        }

        let reference = self.translate_region(region)?;
        let alternate = self.translate_edited_region(region, &Edit::deletion(deleted))?;
        let alternate = realign_deletion(
            alternate,
            (deleted.start - region.interval.start) as usize,
            deleted.len(),
        );

        Ok(pairwise_changes(&reference, &alternate))
    }

    /// Dispatch on the variant kind; substitutions give at most one change.
    pub fn annotate(&self, variant: &Variant) -> Result<Vec<AminoAcidChange>> {
        match variant.kind() {
            VariantKind::Substitution => Ok(self.annotate_snv(variant)?.into_iter().collect()),
            VariantKind::Deletion => self.annotate_deletion(variant),
        }
    }

    ///
    /// Compare a protein region between this reference and an alternate
    /// reference built with [`SequenceStore::apply_changes`]. Every differing
    /// position is reported.
    ///
    pub fn protein_changes(
        &self,
        alternate: &SequenceStore,
        region: &ProteinRegion,
    ) -> Result<Vec<AminoAcidChange>> {
        let reference = self.translate_region(region)?;
        let changed = alternate.query(region.interval.start, region.interval.end)?;
        let changed = self.codons.translate(changed);
        Ok(pairwise_changes(&reference, &changed))
    }
}

///
/// Put the residues of an in-frame deletion back in register with the
/// reference by inserting one [`AminoAcid::Absent`] per deleted codon.
///
/// `offset` is the 0-based position of the first deleted base within the
/// region. A codon-aligned deletion leaves its slot empty; one starting
/// mid-codon merges two codons, so the gap goes after the merged residue.
/// Frameshifts are returned unchanged.
///
fn realign_deletion(mut alternate: Vec<AminoAcid>, offset: usize, deleted: usize) -> Vec<AminoAcid> {
    if deleted % 3 != 0 {
        return alternate;
    }

    let codon = offset / 3;
    let at = if offset % 3 == 0 { codon } else { codon + 1 };
    let at = at.min(alternate.len());

    for _ in 0..deleted / 3 {
        alternate.insert(at, AminoAcid::Absent);
    }
    alternate
}

///
/// Output row for an annotated variant: the variant columns followed by one
/// column per change. Variants without changes produce no row.
///
pub fn format_annotation(variant: &Variant, changes: &[AminoAcidChange]) -> Option<String> {
    if changes.is_empty() {
        return None;
    }
    Some(format!("{}\t{}", variant.as_string(), format_changes(changes)))
}
