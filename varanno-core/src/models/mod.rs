pub mod called;
pub mod interval;
pub mod protein;
pub mod variant;

// re-export for cleaner imports
pub use self::called::CalledVariant;
pub use self::interval::Interval;
pub use self::protein::ProteinRegion;
pub use self::variant::{DELETION_ALLELE, Variant, VariantKind};
