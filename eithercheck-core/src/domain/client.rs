// eithercheck-core/src/domain/client.rs

// Data-only description of the browser-side check. The script renderer embeds it,
// and hosts with their own client runtime can ship it as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Input id of the primary attribute.
    pub attribute: String,
    /// Input ids of the alternatives, in configured order.
    pub either_attributes: Vec<String>,
    /// Formatted, localized message.
    pub message: String,
    /// Trim values before the length check, mirroring a whitespace-blind emptiness predicate.
    #[serde(default, skip_serializing_if = "is_false")]
    pub trim: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
