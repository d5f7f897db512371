#[cfg(feature = "core")]
#[doc(inline)]
pub use varanno_core as core;

#[cfg(feature = "refseq")]
#[doc(inline)]
pub use varanno_refseq as refseq;

#[cfg(feature = "annotate")]
#[doc(inline)]
pub use varanno_annotate as annotate;
