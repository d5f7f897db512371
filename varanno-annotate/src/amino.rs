use std::fmt::{self, Display};

use crate::consts::ABSENT_RESIDUE;
use crate::errors::{AnnotationError, Result};

///
/// One position of a translated protein.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    /// A one-letter residue code (`*` for stop, `X` for an untranslatable codon).
    Residue(u8),
    /// No residue: the position lies past the end of a shortened protein or
    /// inside a deleted codon.
    Absent,
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AminoAcid::Residue(code) => write!(f, "{}", *code as char),
            AminoAcid::Absent => write!(f, "{}", ABSENT_RESIDUE),
        }
    }
}

///
/// A residue that differs between the reference and alternate protein,
/// rendered as `<position><ref>><alt>` (e.g. `614D>G`).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoAcidChange {
    /// 1-based position within the protein
    pub position: usize,
    pub reference: AminoAcid,
    pub alternate: AminoAcid,
}

impl Display for AminoAcidChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}>{}", self.position, self.reference, self.alternate)
    }
}

///
/// Compare the two proteins at a single 0-based index.
///
/// Returns `Ok(None)` for a synonymous position and fails when the index
/// lies outside either sequence.
///
pub fn change_at(
    reference: &[AminoAcid],
    alternate: &[AminoAcid],
    index: usize,
) -> Result<Option<AminoAcidChange>> {
    let (Some(&r), Some(&a)) = (reference.get(index), alternate.get(index)) else {
        return Err(AnnotationError::AminoAcidOutOfRange {
            index,
            length: reference.len().min(alternate.len()),
        });
    };

    Ok((r != a).then_some(AminoAcidChange {
        position: index + 1,
        reference: r,
        alternate: a,
    }))
}

///
/// Compare two proteins position by position up to the longer length; the
/// shorter one is padded with [`AminoAcid::Absent`].
///
pub fn pairwise_changes(reference: &[AminoAcid], alternate: &[AminoAcid]) -> Vec<AminoAcidChange> {
    let length = reference.len().max(alternate.len());
    (0..length)
        .filter_map(|i| {
            let r = reference.get(i).copied().unwrap_or(AminoAcid::Absent);
            let a = alternate.get(i).copied().unwrap_or(AminoAcid::Absent);
            (r != a).then_some(AminoAcidChange {
                position: i + 1,
                reference: r,
                alternate: a,
            })
        })
        .collect()
}

/// Render a change list as tab-separated columns.
pub fn format_changes(changes: &[AminoAcidChange]) -> String {
    changes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\t")
}
