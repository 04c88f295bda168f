pub mod matching;
pub mod position;
pub mod text;

// Re-export key types for easier usage
pub use matching::{
    BracketMatch, DelimiterToken, FenceMode, MatchError, Role, ScanOptions, find_all_pairs,
    find_matching_brackets, find_matching_brackets_with, scan, scan_with,
};
pub use position::{Position, Range};
pub use text::{DocumentError, RopeDocument, TextDocument};
