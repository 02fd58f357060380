use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the four content modules.
///
/// The set is closed: modules are authored, not created at runtime. The
/// slug doubles as the module's route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Journey,
    Handshake,
    Padlock,
    Mfa,
}

impl ModuleId {
    /// All modules, in site order.
    pub const ALL: [ModuleId; 4] = [
        ModuleId::Journey,
        ModuleId::Handshake,
        ModuleId::Padlock,
        ModuleId::Mfa,
    ];

    /// Returns the URL slug for this module.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ModuleId::Journey => "journey",
            ModuleId::Handshake => "handshake",
            ModuleId::Padlock => "padlock",
            ModuleId::Mfa => "mfa",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Error type for parsing a `ModuleId` from a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModuleIdError {
    slug: String,
}

impl fmt::Display for ParseModuleIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no module with slug {:?}", self.slug)
    }
}

impl std::error::Error for ParseModuleIdError {}

impl FromStr for ModuleId {
    type Err = ParseModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journey" => Ok(ModuleId::Journey),
            "handshake" => Ok(ModuleId::Handshake),
            "padlock" => Ok(ModuleId::Padlock),
            "mfa" => Ok(ModuleId::Mfa),
            _ => Err(ParseModuleIdError {
                slug: s.to_string(),
            }),
        }
    }
}
