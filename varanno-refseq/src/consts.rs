/// Window length giving few non-unique anchors on a ~30kb viral genome.
pub const DEFAULT_WINDOW_LENGTH: usize = 14;

pub const FASTA_HEADER_PREFIX: char = '>';
