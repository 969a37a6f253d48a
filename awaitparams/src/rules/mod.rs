use crate::fix::{ByteRangeRewriter, Edit, RewriteError};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
/// Metadata associated with a rule.
pub struct RuleMetadata {
    /// Unique code/ID of the rule.
    pub id: &'static str,
    /// Category of the rule ("signature" or "read").
    pub category: &'static str,
}

/// Trait defining a text substitution rule.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the unique code/ID of the rule.
    fn code(&self) -> &'static str {
        self.metadata().id
    }
    /// Returns the category/functional group of the rule.
    fn category(&self) -> &'static str {
        self.metadata().category
    }
    /// Returns the full metadata for the rule.
    fn metadata(&self) -> RuleMetadata;
    /// Returns one edit per non-overlapping match in `text`, in source order.
    fn find_edits(&self, text: &str) -> Vec<Edit>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// How many times one rule fired on one file.
pub struct RuleHit {
    /// ID of the rule.
    pub id: &'static str,
    /// Number of replaced occurrences.
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text after running a rule pipeline, with the rules that changed it.
pub struct Rewritten {
    /// The final text.
    pub text: String,
    /// One entry per rule that matched at least once, in pipeline order.
    pub hits: Vec<RuleHit>,
}

/// Runs `rules` in order, each one over the output of the previous one.
///
/// # Errors
///
/// Returns an error if a rule produces edits the rewriter rejects.
pub fn apply_rules(source: &str, rules: &[&dyn Rule]) -> Result<Rewritten, RewriteError> {
    let mut text = source.to_owned();
    let mut hits = Vec::new();

    for rule in rules {
        let edits = rule.find_edits(&text);
        if edits.is_empty() {
            continue;
        }
        let matches = edits.len();
        let mut rewriter = ByteRangeRewriter::new(text);
        rewriter.add_edits(edits);
        text = rewriter.apply()?;
        hits.push(RuleHit {
            id: rule.code(),
            matches,
        });
    }

    Ok(Rewritten { text, hits })
}

/// The migration pipeline minus any rule whose ID is in `ignore`.
///
/// Order of the remaining rules is preserved.
#[must_use]
pub fn select_rules<S: std::hash::BuildHasher>(
    ignore: &std::collections::HashSet<String, S>,
) -> Vec<&'static dyn Rule> {
    params::default_rules()
        .iter()
        .filter(|rule| !ignore.contains(rule.code()))
        .map(|rule| rule as &dyn Rule)
        .collect()
}

/// Every rule in the migration pipeline, in application order.
#[must_use]
pub fn all_rules() -> Vec<&'static dyn Rule> {
    select_rules(&FxHashSet::default())
}

/// Module containing rule ID constants.
pub mod ids;
/// Module containing the `params` migration rules.
pub mod params;
