//! Search options

/// What a search key is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Object keys only
    Keys,
    /// Scalar values only
    Values,
    /// Both keys and values
    #[default]
    Both,
}

impl MatchMode {
    pub fn includes_keys(&self) -> bool {
        matches!(self, MatchMode::Keys | MatchMode::Both)
    }

    pub fn includes_values(&self) -> bool {
        matches!(self, MatchMode::Values | MatchMode::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Keys => "keys",
            MatchMode::Values => "values",
            MatchMode::Both => "both",
        }
    }

    /// Derive the mode from a pair of mutually exclusive CLI flags
    pub fn from_flags(keys_only: bool, values_only: bool) -> Self {
        match (keys_only, values_only) {
            (true, _) => MatchMode::Keys,
            (_, true) => MatchMode::Values,
            _ => MatchMode::Both,
        }
    }
}

/// Options controlling one traversal run
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub mode: MatchMode,
    pub case_sensitive: bool,
}

impl SearchOptions {
    pub fn new(mode: MatchMode, case_sensitive: bool) -> Self {
        Self {
            mode,
            case_sensitive,
        }
    }
}
