use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap as HashMap;
use varanno_core::utils::get_dynamic_reader;

use crate::amino::AminoAcid;
use crate::errors::{AnnotationError, Result};

/// Residue reported for a codon containing anything other than A, C, G, T/U.
pub const UNKNOWN_RESIDUE: u8 = b'X';

///
/// Codon-to-residue lookup used to translate protein regions.
///
/// Translation reads whole codons from the start of the sequence; a trailing
/// partial codon is ignored.
///
pub trait CodonTable {
    fn translate_codon(&self, codon: &[u8]) -> AminoAcid;

    fn translate(&self, sequence: &[u8]) -> Vec<AminoAcid> {
        sequence
            .chunks_exact(3)
            .map(|codon| self.translate_codon(codon))
            .collect()
    }
}

impl<T: CodonTable + ?Sized> CodonTable for Box<T> {
    fn translate_codon(&self, codon: &[u8]) -> AminoAcid {
        (**self).translate_codon(codon)
    }
}

impl<T: CodonTable + ?Sized> CodonTable for &T {
    fn translate_codon(&self, codon: &[u8]) -> AminoAcid {
        (**self).translate_codon(codon)
    }
}

/// Map nucleotide byte to index: A=0, C=1, G=2, T/U=3.
fn nucleotide_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Standard genetic code (NCBI translation table 1).
/// Index = first*16 + second*4 + third, nucleotide order A=0 C=1 G=2 T=3.
const STANDARD_TABLE: [u8; 64] = [
    // AAA AAC AAG AAT  ACA ACC ACG ACT  AGA AGC AGG AGT  ATA ATC ATG ATT
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S', b'I', b'I', b'M', b'I',
    // CAA CAC CAG CAT  CCA CCC CCG CCT  CGA CGC CGG CGT  CTA CTC CTG CTT
    b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P', b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L',
    // GAA GAC GAG GAT  GCA GCC GCG GCT  GGA GGC GGG GGT  GTA GTC GTG GTT
    b'E', b'D', b'E', b'D', b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    // TAA TAC TAG TAT  TCA TCC TCG TCT  TGA TGC TGG TGT  TTA TTC TTG TTT
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C', b'L', b'F', b'L', b'F',
];

///
/// The standard genetic code. Stop codons translate to `*` and translation
/// continues past them.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCode;

impl CodonTable for StandardCode {
    fn translate_codon(&self, codon: &[u8]) -> AminoAcid {
        let [b1, b2, b3] = codon else {
            return AminoAcid::Residue(UNKNOWN_RESIDUE);
        };
        match (
            nucleotide_index(*b1),
            nucleotide_index(*b2),
            nucleotide_index(*b3),
        ) {
            (Some(i), Some(j), Some(k)) => AminoAcid::Residue(STANDARD_TABLE[i * 16 + j * 4 + k]),
            _ => AminoAcid::Residue(UNKNOWN_RESIDUE),
        }
    }
}

///
/// A codon table read from a two-column file (`codon  residue`), for codes
/// other than the standard one.
///
#[derive(Debug, Clone, Default)]
pub struct CodonMap {
    table: HashMap<[u8; 3], u8>,
}

impl CodonMap {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table: HashMap<[u8; 3], u8> = HashMap::default();

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let (Some(codon), Some(residue)) = (fields.next(), fields.next()) else {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(AnnotationError::InvalidCodonTable(line));
            };

            let codon: [u8; 3] = codon
                .to_ascii_uppercase()
                .as_bytes()
                .try_into()
                .map_err(|_| AnnotationError::InvalidCodonTable(line.clone()))?;
            table.insert(codon, residue.as_bytes()[0]);
        }

        Ok(CodonMap { table })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path).map_err(|e| {
            AnnotationError::InvalidCodonTable(format!("{}: {:#}", path.display(), e))
        })?;
        Self::from_reader(reader)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl CodonTable for CodonMap {
    fn translate_codon(&self, codon: &[u8]) -> AminoAcid {
        let key: Option<[u8; 3]> = codon
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect::<Vec<u8>>()
            .try_into()
            .ok();
        let residue = key
            .and_then(|key| self.table.get(&key).copied())
            .unwrap_or(UNKNOWN_RESIDUE);
        AminoAcid::Residue(residue)
    }
}
