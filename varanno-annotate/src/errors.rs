use thiserror::Error;

use varanno_core::RecordError;
use varanno_core::models::Interval;
use varanno_refseq::RefSeqError;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error(transparent)]
    Reference(#[from] RefSeqError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Amino acid index {index} is outside the translated protein (length {length})")]
    AminoAcidOutOfRange { index: usize, length: usize },

    #[error("Variant at {variant} does not fall inside protein region {region}")]
    VariantOutsideRegion { variant: Interval, region: Interval },

    #[error("Protein region {region} spans {length} bases, which is not a whole number of codons")]
    Frame { region: Interval, length: usize },

    #[error("Invalid flank record: {0}")]
    InvalidFlankRecord(String),

    #[error("Invalid codon table entry: {0}")]
    InvalidCodonTable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
