/// Header rows at the top of a flank table.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Column holding the "prev" window; later columns hold deviants and "next".
pub const DEFAULT_FLANK_COLUMN_OFFSET: usize = 5;

/// Rendering of a residue missing from a truncated or shortened protein.
pub const ABSENT_RESIDUE: char = '_';

/// Joins the clades assigned to one variant.
pub const CLADE_SEPARATOR: &str = ":";
