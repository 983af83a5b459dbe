//! Module config — the per-container log input configuration emitted by the
//! builder and consumed by the agent's config loader.
//!
//! The fields map is typed (string → string) rather than a nested dynamic
//! map, so merging routing fields into a pre-populated map cannot
//! type-confuse an existing non-map value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields-map key for the logz routing token.
pub const FIELD_LOGZ_TOKEN: &str = "logzToken";
/// Fields-map key for the logz codec tag.
pub const FIELD_LOGZ_CODEC: &str = "logzCodec";
/// Fields-map key for the logz environment tag.
pub const FIELD_LOGZ_ENV: &str = "logzEnv";

/// Multiline match direction: join continuation lines onto the entry
/// before or after the matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Before,
    After,
}

/// Multiline joining rule attached to a module config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilineConfig {
    pub pattern: String,
    pub negate: bool,
    #[serde(rename = "match")]
    pub match_mode: MatchMode,
}

/// One log input module configuration.
///
/// Always carries exactly one path glob; `multiline` and `fields` are
/// omitted from the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<MultilineConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ModuleConfig {
    /// A module config tailing `path`, with no multiline rule and no fields.
    pub fn new(path: String) -> Self {
        Self {
            paths: vec![path],
            multiline: None,
            fields: None,
        }
    }

    /// Set the multiline joining rule, overwriting any previous rule.
    ///
    /// `negate` and `match_mode` are parameters rather than baked-in policy
    /// so per-annotation overrides need no contract change.
    pub fn set_multiline(&mut self, pattern: &str, negate: bool, match_mode: MatchMode) {
        self.multiline = Some(MultilineConfig {
            pattern: pattern.to_string(),
            negate,
            match_mode,
        });
    }

    /// Write the three logz routing fields, creating the fields map when
    /// absent. Unrelated keys already present (e.g. `namespace`) are
    /// preserved; repeated calls with the same arguments are idempotent.
    pub fn set_logz_fields(&mut self, token: &str, codec: &str, env: &str) {
        let fields = self.fields.get_or_insert_with(BTreeMap::new);
        fields.insert(FIELD_LOGZ_TOKEN.to_string(), token.to_string());
        fields.insert(FIELD_LOGZ_CODEC.to_string(), codec.to_string());
        fields.insert(FIELD_LOGZ_ENV.to_string(), env.to_string());
    }
}
