//! Byte-range text rewriter.
//!
//! Rules report where they matched as byte ranges; this module splices the
//! replacements in, leaving every byte outside those ranges untouched.
//!
//! # Usage
//!
//! ```
//! use awaitparams::fix::{ByteRangeRewriter, Edit};
//!
//! let source = "const id = params.id";
//! let mut rewriter = ByteRangeRewriter::new(source);
//! rewriter.add_edit(Edit::new(0, source.len(), "const { id } = await params"));
//! let fixed = rewriter.apply().expect("should apply");
//! assert_eq!(fixed, "const { id } = await params");
//! ```

use std::fmt;

/// A single replacement of `start_byte..end_byte`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Two or more edits have overlapping ranges
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range is out of bounds
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
    /// Edit boundary falls inside a multi-byte character
    NotCharBoundary {
        /// Index of the bad edit
        edit_index: usize,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingEdits { edit_a, edit_b } => {
                write!(f, "Overlapping edits at indices {edit_a} and {edit_b}")
            }
            Self::OutOfBounds {
                edit_index,
                end_byte,
                source_len,
            } => {
                write!(
                    f,
                    "Edit {edit_index} out of bounds: end_byte {end_byte} > source length {source_len}"
                )
            }
            Self::NotCharBoundary { edit_index } => {
                write!(f, "Edit {edit_index} does not start and end on a character boundary")
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// Safe text rewriter using byte ranges
///
/// Edits are validated to not overlap, then spliced in a single pass over
/// the source in offset order.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    source: String,
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Add multiple edits
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds, or split a character
    pub fn validate(&self) -> Result<(), RewriteError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.end_byte > self.source.len() {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
            if !self.source.is_char_boundary(edit.start_byte)
                || !self.source.is_char_boundary(edit.end_byte)
            {
                return Err(RewriteError::NotCharBoundary { edit_index: i });
            }
        }

        // Once sorted by range, any overlap shows up between neighbours.
        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| (self.edits[i].start_byte, self.edits[i].end_byte));
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.edits[a].overlaps(&self.edits[b]) {
                return Err(RewriteError::OverlappingEdits {
                    edit_a: a.min(b),
                    edit_b: a.max(b),
                });
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// # Errors
    /// Returns error if the edits fail [`validate`](Self::validate)
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut sorted_edits = self.edits;
        sorted_edits.sort_by_key(|e| (e.start_byte, e.end_byte));

        let mut result = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for edit in &sorted_edits {
            result.push_str(&self.source[cursor..edit.start_byte]);
            result.push_str(&edit.replacement);
            cursor = edit.end_byte;
        }
        result.push_str(&self.source[cursor..]);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replacement() {
        let source = "export async function GET() {}";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(22, 25, "PUT"));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, "export async function PUT() {}");
    }

    #[test]
    fn test_multiple_non_overlapping_edits() {
        let source = "aaa bbb ccc";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(0, 3, "AAA"));
        rewriter.add_edit(Edit::new(8, 11, "CCC"));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, "AAA bbb CCC");
    }

    #[test]
    fn test_overlapping_edits_error() {
        let source = "const id = params.id";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(0, 12, "x"));
        rewriter.add_edit(Edit::new(6, 20, "y"));

        let result = rewriter.apply();
        assert!(matches!(result, Err(RewriteError::OverlappingEdits { .. })));
    }

    #[test]
    fn test_out_of_bounds_error() {
        let source = "short";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(0, 100, "long"));

        let result = rewriter.apply();
        assert!(matches!(result, Err(RewriteError::OutOfBounds { .. })));
    }

    #[test]
    fn test_split_character_error() {
        // '✅' is three bytes
        let source = "✅ ok";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(1, 2, "x"));

        let result = rewriter.apply();
        assert_eq!(result, Err(RewriteError::NotCharBoundary { edit_index: 0 }));
    }

    #[test]
    fn test_replacement_grows_text() {
        let source = "  const id = parseInt(params.id)\n  return id\n";
        let start = source.find("const").expect("Should find const");
        let end = source.find('\n').expect("Should find newline");
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::new(
            start,
            end,
            "const { id: paramId } = await params\n    const id = parseInt(paramId)",
        ));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(
            result,
            "  const { id: paramId } = await params\n    const id = parseInt(paramId)\n  return id\n"
        );
    }

    #[test]
    fn test_overlap_found_regardless_of_insertion_order() {
        let source = "0123456789abcdef";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edits([
            Edit::new(12, 14, "x"),
            Edit::new(0, 2, "y"),
            Edit::new(6, 8, "z"),
            Edit::new(1, 4, "w"),
        ]);

        assert_eq!(
            rewriter.validate(),
            Err(RewriteError::OverlappingEdits {
                edit_a: 1,
                edit_b: 3
            })
        );
    }

    #[test]
    fn test_many_edits_validate_and_apply() {
        let line = "const id = params.id\n";
        let count = 200_000;
        let source = line.repeat(count);
        let mut rewriter = ByteRangeRewriter::new(source.as_str());
        rewriter.add_edits((0..count).map(|i| {
            let start = i * line.len();
            Edit::new(start, start + line.len() - 1, "const { id } = await params")
        }));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, "const { id } = await params\n".repeat(count));
    }

    #[test]
    fn test_empty_edits() {
        let source = "hello world";
        let rewriter = ByteRangeRewriter::new(source);
        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, source);
    }

    #[test]
    fn test_adjacent_non_overlapping_edits() {
        let source = "abcdef";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edits([Edit::new(3, 6, "YYY"), Edit::new(0, 3, "XXX")]);

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, "XXXYYY");
    }
}
