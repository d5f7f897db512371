//! # Reference sequence indexing for a single-contig (viral) genome
//!
//! Two structures are built from the same reference FASTA:
//!
//! - [`SequenceStore`]: 1-based closed-interval queries over the contig, optionally
//!   with a hypothetical [`Edit`] applied to the returned copy, plus an explicit
//!   in-place [`SequenceStore::apply_changes`] for deriving an alternate reference.
//! - [`KmerIndex`]: every fixed-length window of the reference mapped to all the
//!   intervals where it occurs, used to anchor flanking windows back onto the genome.
//!
//! ```
//! use varanno_refseq::{Edit, KmerIndex, SequenceStore};
//! use varanno_core::models::Interval;
//!
//! let store = SequenceStore::load(">ref\nATCGAATTTGAATGTA\n").unwrap();
//! assert_eq!(store.query(7, 10).unwrap(), b"TTTG");
//!
//! let edit = Edit::substitution(Interval::new(8, 8).unwrap(), "C");
//! assert_eq!(store.query_with_edit(7, 10, &edit).unwrap(), b"TCTG".to_vec());
//!
//! let index = KmerIndex::from_store(&store, 3).unwrap();
//! assert_eq!(index.coordinates_of("GAA").len(), 2);
//! ```
pub mod consts;
pub mod errors;
pub mod fasta;
pub mod kmer;
pub mod store;

// re-exports
pub use consts::*;
pub use errors::*;
pub use fasta::{ContigRecord, load_single_contig, parse_fasta_header, parse_single_contig};
pub use kmer::KmerIndex;
pub use store::{Edit, SequenceStore};
