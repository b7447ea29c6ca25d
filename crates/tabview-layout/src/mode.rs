//! Tab width policy

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// Each tab measures its own header
    SizeToContent,
    /// Tabs share the available width equally, within the min/max bounds
    #[default]
    Equal,
}

impl WidthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthMode::SizeToContent => "sizetocontent",
            WidthMode::Equal => "equal",
        }
    }
}

impl std::fmt::Display for WidthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WidthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sizetocontent" | "size_to_content" => Ok(WidthMode::SizeToContent),
            "equal" => Ok(WidthMode::Equal),
            _ => Err(format!("Unknown width mode: {}", s)),
        }
    }
}
