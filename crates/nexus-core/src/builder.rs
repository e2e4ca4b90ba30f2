//! Query builder: flattening a structured draft into one operator string.
//!
//! `build` is deterministic and total: one token per non-empty field, in
//! the fixed `QueryField::ALL` order, space-joined. Values are inserted
//! verbatim; no escaping is performed inside operator tokens.

use crate::models::{QueryDraft, QueryField};

/// Flatten a draft into a single operator-syntax query string.
///
/// Empty fields contribute nothing; an all-empty draft yields the empty
/// string.
pub fn build(draft: &QueryDraft) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in QueryField::ALL {
        let value = draft.value(field);
        if value.is_empty() {
            continue;
        }
        parts.push(match field {
            QueryField::Site => format!("site:{}", value),
            QueryField::Filetype => format!("filetype:{}", value),
            QueryField::Intitle => format!("intitle:{}", value),
            QueryField::Inurl => format!("inurl:{}", value),
            QueryField::Intext => format!("intext:{}", value),
            QueryField::Exact => format!("\"{}\"", value),
            QueryField::Exclude => format!("-{}", value),
        });
    }

    parts.join(" ")
}

/// The explicit application-state object holding the in-progress draft and
/// the derived current query string.
///
/// The current string is always the re-derivation of the draft, except
/// after `load_literal`, which replaces the string wholesale (loading a
/// template or a vault entry) without decomposing it back into fields.
/// That load is one-way: the next field edit rebuilds from the structured
/// draft and overwrites the literal.
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    draft: QueryDraft,
    current: String,
}

impl QuerySession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query string.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The structured draft.
    pub fn draft(&self) -> &QueryDraft {
        &self.draft
    }

    /// Set one draft field and rebuild the current string from the draft.
    pub fn set_field(&mut self, field: QueryField, value: impl Into<String>) -> &str {
        self.draft.set(field, value);
        self.current = build(&self.draft);
        &self.current
    }

    /// Reset every field and the current string.
    pub fn clear(&mut self) {
        self.draft = QueryDraft::default();
        self.current.clear();
    }

    /// Replace the current query string wholesale, leaving the draft as-is.
    pub fn load_literal(&mut self, query: impl Into<String>) -> &str {
        self.current = query.into();
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_empty_draft_is_empty_string() {
        assert_eq!(build(&QueryDraft::default()), "");
    }

    #[test]
    fn build_joins_tokens_in_fixed_order() {
        let draft = QueryDraft {
            site: "example.com".to_string(),
            filetype: "pdf".to_string(),
            intext: "password".to_string(),
            ..QueryDraft::default()
        };
        assert_eq!(build(&draft), "site:example.com filetype:pdf intext:password");
    }

    #[test]
    fn build_formats_exact_and_exclude() {
        let draft = QueryDraft {
            exact: "exact phrase".to_string(),
            exclude: "spam".to_string(),
            ..QueryDraft::default()
        };
        assert_eq!(build(&draft), "\"exact phrase\" -spam");
    }

    #[test]
    fn build_emits_all_seven_tokens() {
        let mut draft = QueryDraft::default();
        for field in QueryField::ALL {
            draft.set(field, "v");
        }
        assert_eq!(
            build(&draft),
            "site:v filetype:v intitle:v inurl:v intext:v \"v\" -v"
        );
    }

    #[test]
    fn build_inserts_values_verbatim() {
        // No escaping: a value containing a quote passes straight through
        let draft = QueryDraft {
            intext: "pass\"word".to_string(),
            ..QueryDraft::default()
        };
        assert_eq!(build(&draft), "intext:pass\"word");
    }

    #[test]
    fn build_has_no_leading_or_trailing_space() {
        let draft = QueryDraft {
            exclude: "spam".to_string(),
            ..QueryDraft::default()
        };
        let built = build(&draft);
        assert_eq!(built, built.trim());
    }

    #[test]
    fn session_set_field_rebuilds_current() {
        let mut session = QuerySession::new();
        session.set_field(QueryField::Site, "example.com");
        assert_eq!(session.current(), "site:example.com");

        session.set_field(QueryField::Filetype, "pdf");
        assert_eq!(session.current(), "site:example.com filetype:pdf");
    }

    #[test]
    fn session_clear_resets_everything() {
        let mut session = QuerySession::new();
        session.set_field(QueryField::Intitle, "login");
        session.load_literal("inurl:admin");

        session.clear();
        assert_eq!(session.current(), "");
        assert!(session.draft().is_empty());
    }

    #[test]
    fn session_clear_then_build_is_empty() {
        let mut session = QuerySession::new();
        session.set_field(QueryField::Site, "example.com");
        session.clear();
        assert_eq!(build(session.draft()), "");
    }

    #[test]
    fn load_literal_replaces_without_touching_draft() {
        let mut session = QuerySession::new();
        session.set_field(QueryField::Site, "example.com");

        session.load_literal("filetype:env intext:DB_PASSWORD");
        assert_eq!(session.current(), "filetype:env intext:DB_PASSWORD");
        assert_eq!(session.draft().site, "example.com");
    }

    #[test]
    fn field_edit_after_literal_discards_the_literal() {
        // The literal load is one-way: the next rebuild comes from the draft
        let mut session = QuerySession::new();
        session.load_literal("inurl:phpinfo.php");

        session.set_field(QueryField::Site, "example.com");
        assert_eq!(session.current(), "site:example.com");
    }
}
