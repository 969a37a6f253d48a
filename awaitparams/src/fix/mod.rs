//! Text rewriting infrastructure.
//!
//! The core component is `ByteRangeRewriter`, which applies
//! edits using byte offsets so that only matched spans change.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
