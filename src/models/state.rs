use serde::{Deserialize, Serialize};

/// A named node in a definition's state graph.
///
/// State identifiers are caller-supplied and preserved verbatim; they must
/// be unique within their definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub name: String,
    pub is_initial: bool,
    pub is_final: bool,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
