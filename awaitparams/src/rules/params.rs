//! Rules that turn a synchronous `params` argument into an awaited one.
//!
//! Signature rules wrap the declared type in `Promise<...>`; read rules
//! replace `params.<field>` reads with a destructuring `await params`.

use super::{Rule, RuleMetadata};
use crate::fix::Edit;
use crate::rules::ids::{
    RULE_ID_DIRECT_ID_READ, RULE_ID_ID_ROLE_SIGNATURE, RULE_ID_PARSE_INT_ID_READ,
    RULE_ID_ROLE_ID_READ, RULE_ID_SINGLE_ID_SIGNATURE,
};
use regex::Regex;
use std::sync::OnceLock;

const CATEGORY_SIGNATURE: &str = "signature";
const CATEGORY_READ: &str = "read";

/// A regex whose every match is replaced by fixed text.
#[derive(Debug)]
pub struct SubstitutionRule {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    pattern: Regex,
    replacement: &'static str,
    /// A match immediately followed by this character is left alone.
    forbid_next: Option<char>,
}

impl SubstitutionRule {
    #[allow(clippy::expect_used)]
    fn new(
        id: &'static str,
        name: &'static str,
        category: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            category,
            pattern: Regex::new(pattern).expect("Invalid rule regex pattern"),
            replacement,
            forbid_next: None,
        }
    }

    fn not_followed_by(mut self, c: char) -> Self {
        self.forbid_next = Some(c);
        self
    }
}

impl Rule for SubstitutionRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: self.id,
            category: self.category,
        }
    }

    fn find_edits(&self, text: &str) -> Vec<Edit> {
        self.pattern
            .find_iter(text)
            .filter(|m| match self.forbid_next {
                Some(c) => !text[m.end()..].starts_with(c),
                None => true,
            })
            .map(|m| Edit::new(m.start(), m.end(), self.replacement))
            .collect()
    }
}

/// The migration rules in application order.
///
/// `AWP-R002` must run after `AWP-R001` and skips matches followed by `)`,
/// so it never touches a `params.id` that sits inside a call.
pub fn default_rules() -> &'static [SubstitutionRule] {
    static RULES: OnceLock<Vec<SubstitutionRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            SubstitutionRule::new(
                RULE_ID_SINGLE_ID_SIGNATURE,
                "single-id-signature",
                CATEGORY_SIGNATURE,
                r"\{\s*params\s*\}:\s*\{\s*params:\s*\{\s*id:\s*string\s*\}\s*\}",
                "{ params }: { params: Promise<{ id: string }> }",
            ),
            SubstitutionRule::new(
                RULE_ID_ID_ROLE_SIGNATURE,
                "id-role-signature",
                CATEGORY_SIGNATURE,
                r"\{\s*params\s*\}:\s*\{\s*params:\s*\{\s*id:\s*string,\s*roleId:\s*string\s*\}\s*\}",
                "{ params }: { params: Promise<{ id: string, roleId: string }> }",
            ),
            SubstitutionRule::new(
                RULE_ID_PARSE_INT_ID_READ,
                "parse-int-id-read",
                CATEGORY_READ,
                r"const id = parseInt\(params\.id\)",
                "const { id: paramId } = await params\n    const id = parseInt(paramId)",
            ),
            SubstitutionRule::new(
                RULE_ID_DIRECT_ID_READ,
                "direct-id-read",
                CATEGORY_READ,
                r"const id = params\.id",
                "const { id } = await params",
            )
            .not_followed_by(')'),
            SubstitutionRule::new(
                RULE_ID_ROLE_ID_READ,
                "role-id-read",
                CATEGORY_READ,
                r"const roleId = params\.roleId",
                "const { roleId } = await params",
            ),
        ]
    })
}
