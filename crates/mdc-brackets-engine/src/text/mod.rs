//! # Text Access
//!
//! Read-only line access to the document being queried, plus the coordinate
//! helpers needed to report columns the way editors count them.
//!
//! ## Modules
//!
//! - **`document`**: The `TextDocument` accessor trait and its slice impls
//! - **`rope`**: `RopeDocument`, a `TextDocument` over an `xi_rope::Rope`
//! - **`span`**: Byte spans within a single line
//! - **`utf16`**: Byte offset <-> UTF-16 column conversion
//!
//! ## Key Invariants
//!
//! - Line numbers are zero-based
//! - Lines are handed out without their terminating `\n` / `\r\n`
//! - Columns crossing the API boundary are UTF-16 code units; byte offsets
//!   stay internal

pub mod document;
pub mod rope;
pub mod span;
pub mod utf16;

pub use document::{DocumentError, TextDocument};
pub use rope::RopeDocument;
pub use span::Span;
pub use utf16::{byte_to_utf16, utf16_len, utf16_to_byte};
