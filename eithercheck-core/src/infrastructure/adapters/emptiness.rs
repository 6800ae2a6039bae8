// eithercheck-core/src/infrastructure/adapters/emptiness.rs

use serde::{Deserialize, Serialize};

use crate::ports::{AttributeValue, Emptiness};

/// null, "", [] and {} are empty. `0`, `false` and whitespace are real values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEmptiness;

impl Emptiness for HostEmptiness {
    fn is_empty(&self, value: &AttributeValue) -> bool {
        match value {
            AttributeValue::Null => true,
            AttributeValue::String(s) => s.is_empty(),
            AttributeValue::Array(a) => a.is_empty(),
            AttributeValue::Object(o) => o.is_empty(),
            AttributeValue::Bool(_) | AttributeValue::Number(_) => false,
        }
    }
}

/// Like `HostEmptiness`, but whitespace-only strings are empty too.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankEmptiness;

impl Emptiness for BlankEmptiness {
    fn is_empty(&self, value: &AttributeValue) -> bool {
        match value {
            AttributeValue::String(s) => s.trim().is_empty(),
            other => HostEmptiness.is_empty(other),
        }
    }

    fn trims_whitespace(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptinessMode {
    #[default]
    Host,
    Blank,
}

impl EmptinessMode {
    pub fn predicate(&self) -> &'static dyn Emptiness {
        match self {
            Self::Host => &HostEmptiness,
            Self::Blank => &BlankEmptiness,
        }
    }
}

impl std::str::FromStr for EmptinessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(Self::Host),
            "blank" => Ok(Self::Blank),
            _ => Err(format!("Unknown emptiness mode: {}", s)),
        }
    }
}
