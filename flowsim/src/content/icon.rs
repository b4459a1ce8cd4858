//! Icon-name indirection for content records.
//!
//! Content slices reference icons by name (`"Zap"`, `"Server"`, ...).
//! Rather than dispatching through the name at render time, the name is
//! resolved once, at deserialization, into this closed enum; unknown
//! names fall back to [`IconKey::Box`] instead of failing the slice.
//! Each key maps to a terminal glyph for the text front-ends.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A renderable symbol referenced by name from content slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKey {
    Activity,
    BarChart2,
    BookOpen,
    Cpu,
    Database,
    Eye,
    GitMerge,
    Globe,
    Layers,
    Leaf,
    Network,
    Radio,
    Rocket,
    Server,
    ShieldCheck,
    Zap,
    /// Fallback for unknown names.
    Box,
}

impl IconKey {
    /// Resolve a stored icon name; unknown names get the fallback key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Activity" => Self::Activity,
            "BarChart2" => Self::BarChart2,
            "BookOpen" => Self::BookOpen,
            "Cpu" => Self::Cpu,
            "Database" => Self::Database,
            "Eye" => Self::Eye,
            "GitMerge" => Self::GitMerge,
            "Globe" => Self::Globe,
            "Layers" => Self::Layers,
            "Leaf" => Self::Leaf,
            "Network" => Self::Network,
            "Radio" => Self::Radio,
            "Rocket" => Self::Rocket,
            "Server" => Self::Server,
            "ShieldCheck" => Self::ShieldCheck,
            "Zap" => Self::Zap,
            _ => Self::Box,
        }
    }

    /// The canonical stored name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "Activity",
            Self::BarChart2 => "BarChart2",
            Self::BookOpen => "BookOpen",
            Self::Cpu => "Cpu",
            Self::Database => "Database",
            Self::Eye => "Eye",
            Self::GitMerge => "GitMerge",
            Self::Globe => "Globe",
            Self::Layers => "Layers",
            Self::Leaf => "Leaf",
            Self::Network => "Network",
            Self::Radio => "Radio",
            Self::Rocket => "Rocket",
            Self::Server => "Server",
            Self::ShieldCheck => "ShieldCheck",
            Self::Zap => "Zap",
            Self::Box => "Box",
        }
    }

    /// A terminal glyph standing in for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Activity => "~",
            Self::BarChart2 => "|||",
            Self::BookOpen => "[=]",
            Self::Cpu => "[#]",
            Self::Database => "(=)",
            Self::Eye => "(o)",
            Self::GitMerge => ">-",
            Self::Globe => "(@)",
            Self::Layers => "=-=",
            Self::Leaf => ",v",
            Self::Network => "-<-",
            Self::Radio => "((.))",
            Self::Rocket => "/^\\",
            Self::Server => "[::]",
            Self::ShieldCheck => "(v)",
            Self::Zap => "-z",
            Self::Box => "[ ]",
        }
    }
}

impl Default for IconKey {
    fn default() -> Self {
        Self::Box
    }
}

impl From<String> for IconKey {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<IconKey> for String {
    fn from(key: IconKey) -> Self {
        key.as_str().to_owned()
    }
}

impl FromStr for IconKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
