//! Core data models for dorknexus.
//!
//! These types are shared across all dorknexus crates and represent the
//! core domain entities: the structured query draft, saved vault items,
//! the template catalog records, and the AI assistant response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// QUERY BUILDER TYPES
// =============================================================================

/// One of the fixed named slots of the query builder.
///
/// The declaration order here is the canonical output order of the built
/// query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryField {
    /// `site:`, limit results to a specific domain.
    Site,
    /// `filetype:`, search for specific file types.
    Filetype,
    /// `intitle:`, words in the page title.
    Intitle,
    /// `inurl:`, words in the page URL.
    Inurl,
    /// `intext:`, words in the page content.
    Intext,
    /// `"..."`, exact phrase match.
    Exact,
    /// `-...`, exclude a term from results.
    Exclude,
}

impl QueryField {
    /// All fields in canonical output order.
    pub const ALL: [QueryField; 7] = [
        QueryField::Site,
        QueryField::Filetype,
        QueryField::Intitle,
        QueryField::Inurl,
        QueryField::Intext,
        QueryField::Exact,
        QueryField::Exclude,
    ];
}

impl std::fmt::Display for QueryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Site => write!(f, "site"),
            Self::Filetype => write!(f, "filetype"),
            Self::Intitle => write!(f, "intitle"),
            Self::Inurl => write!(f, "inurl"),
            Self::Intext => write!(f, "intext"),
            Self::Exact => write!(f, "exact"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

impl std::str::FromStr for QueryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "site" => Ok(Self::Site),
            "filetype" => Ok(Self::Filetype),
            "intitle" => Ok(Self::Intitle),
            "inurl" => Ok(Self::Inurl),
            "intext" => Ok(Self::Intext),
            "exact" => Ok(Self::Exact),
            "exclude" => Ok(Self::Exclude),
            _ => Err(format!("Invalid query field: {}", s)),
        }
    }
}

/// The structured, per-field in-progress representation of a query.
///
/// An empty string means the field is absent and contributes no token to
/// the built query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDraft {
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub filetype: String,
    #[serde(default)]
    pub intitle: String,
    #[serde(default)]
    pub inurl: String,
    #[serde(default)]
    pub intext: String,
    #[serde(default)]
    pub exact: String,
    #[serde(default)]
    pub exclude: String,
}

impl QueryDraft {
    /// Current value of the given field.
    pub fn value(&self, field: QueryField) -> &str {
        match field {
            QueryField::Site => &self.site,
            QueryField::Filetype => &self.filetype,
            QueryField::Intitle => &self.intitle,
            QueryField::Inurl => &self.inurl,
            QueryField::Intext => &self.intext,
            QueryField::Exact => &self.exact,
            QueryField::Exclude => &self.exclude,
        }
    }

    /// Set the given field, replacing its previous value.
    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        let slot = match field {
            QueryField::Site => &mut self.site,
            QueryField::Filetype => &mut self.filetype,
            QueryField::Intitle => &mut self.intitle,
            QueryField::Inurl => &mut self.inurl,
            QueryField::Intext => &mut self.intext,
            QueryField::Exact => &mut self.exact,
            QueryField::Exclude => &mut self.exclude,
        };
        *slot = value.into();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        QueryField::ALL.iter().all(|f| self.value(*f).is_empty())
    }
}

// =============================================================================
// VAULT TYPES
// =============================================================================

/// A saved query persisted in the vault.
///
/// Identity is `id`, assigned once at creation; items are immutable after
/// creation and removed only by explicit deletion. `tags` and `notes`
/// default to empty when absent so older vault files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultItem {
    pub id: Uuid,
    pub dork: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl VaultItem {
    /// Construct a fresh item with a new time-ordered id and the current
    /// creation timestamp.
    pub fn new(dork: impl Into<String>, tags: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            dork: dork.into(),
            tags: tags.into(),
            notes: notes.into(),
            timestamp: Utc::now(),
        }
    }
}

// =============================================================================
// TEMPLATE TYPES
// =============================================================================

/// Category tag of a prebuilt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Files,
    Vulns,
    Network,
    Osint,
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Files => write!(f, "files"),
            Self::Vulns => write!(f, "vulns"),
            Self::Network => write!(f, "network"),
            Self::Osint => write!(f, "osint"),
        }
    }
}

impl std::str::FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "files" => Ok(Self::Files),
            "vulns" => Ok(Self::Vulns),
            "network" => Ok(Self::Network),
            "osint" => Ok(Self::Osint),
            _ => Err(format!("Invalid template category: {}", s)),
        }
    }
}

/// Catalog selector: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(TemplateCategory),
}

impl CategoryFilter {
    /// Whether a template of the given category passes this filter.
    pub fn matches(&self, category: TemplateCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<TemplateCategory>().map(Self::Only)
        }
    }
}

/// A fixed, read-only prebuilt query template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub category: TemplateCategory,
    pub query: &'static str,
}

// =============================================================================
// AI ASSISTANT TYPES
// =============================================================================

/// Sensitivity / noise rating returned by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A dork constructed by the assistant from a free-text objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DorkSuggestion {
    pub dork: String,
    pub explanation: String,
    #[serde(alias = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Deep analysis of an existing dork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DorkAnalysis {
    /// Efficiency rating, 0-100.
    pub rating: i32,
    /// Specific flaws or strengths.
    pub critique: Vec<String>,
    /// The improved version of the query.
    #[serde(alias = "optimizedDork")]
    pub optimized_dork: String,
    /// Explanation of the search logic behind the optimization.
    #[serde(alias = "logicCheck")]
    pub logic_check: String,
    /// Probability of false positives.
    #[serde(alias = "estimatedNoise")]
    pub estimated_noise: RiskLevel,
}

/// Target engine for dork translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotEngine {
    Shodan,
    Censys,
    Hunter,
    ZoomEye,
}

impl PivotEngine {
    /// All supported engines, in translation output order.
    pub const ALL: [PivotEngine; 4] = [
        PivotEngine::Shodan,
        PivotEngine::Censys,
        PivotEngine::Hunter,
        PivotEngine::ZoomEye,
    ];
}

impl std::fmt::Display for PivotEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shodan => write!(f, "Shodan"),
            Self::Censys => write!(f, "Censys"),
            Self::Hunter => write!(f, "Hunter"),
            Self::ZoomEye => write!(f, "ZoomEye"),
        }
    }
}

/// One engine's translation of a Google dork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineTranslation {
    pub engine: PivotEngine,
    pub query: String,
    pub explanation: String,
}

/// A web source backing a research answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSource {
    pub title: String,
    pub uri: String,
}

/// Grounded research summary for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub content: String,
    #[serde(default)]
    pub sources: Vec<ResearchSource>,
}

/// One simulated search hit from the terminal live search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
}

/// A generation response together with any grounding sources the backend
/// surfaced. Backends without grounding return an empty source list.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundedResponse {
    pub text: String,
    pub sources: Vec<ResearchSource>,
}
