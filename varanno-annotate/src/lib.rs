//! # Amino-acid consequences of viral SNVs and deletions
//!
//! Built on the [`varanno_refseq`] store and k-mer index:
//!
//! - [`anchor`]: place flank windows from resequencing output back on the
//!   reference and call SNVs or deletions between them.
//! - [`VariantAnnotator`]: translate a protein region with and without a
//!   variant and report the residues that differ.
//! - [`CladeTable`] and [`filter::best_supported`] for post-processing calls.
//!
//! ```
//! use varanno_annotate::{StandardCode, VariantAnnotator};
//! use varanno_core::models::Variant;
//! use varanno_refseq::SequenceStore;
//!
//! let store = SequenceStore::load(">ref\nCCATGAAACTGGGCTAAGG\n").unwrap();
//! let variant =
//!     Variant::from_line("ref\t6\t6\tv1\tA\tG\t4\tref\t3\t17\tG\tprotein").unwrap();
//!
//! let annotator = VariantAnnotator::new(&store, StandardCode);
//! let changes = annotator.annotate(&variant).unwrap();
//! assert_eq!(changes[0].to_string(), "2K>E");
//! ```
pub mod amino;
pub mod anchor;
pub mod annotator;
pub mod clade;
pub mod codon;
pub mod config;
pub mod consts;
pub mod errors;
pub mod filter;
pub mod flanks;

// re-exports
pub use amino::{AminoAcid, AminoAcidChange, format_changes};
pub use anchor::{anchor_deletion, anchor_snv, discover_deletions, discover_snvs};
pub use annotator::{VariantAnnotator, amino_acid_index, format_annotation};
pub use clade::CladeTable;
pub use codon::{CodonMap, CodonTable, StandardCode};
pub use config::AnnotatorConfig;
pub use consts::*;
pub use errors::*;
pub use flanks::{FlankKind, FlankRecord};
