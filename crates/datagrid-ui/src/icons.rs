use serde::Serialize;

/// Icons referenced by the grid widgets, named after the lucide set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    ArrowUpDown,
    ArrowUp,
    ArrowDown,
    Filter,
    Calculator,
    Calendar,
    Search,
    Check,
    CheckSquare,
    Square,
    X,
}

impl IconName {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArrowUpDown => "arrow-up-down",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Filter => "filter",
            Self::Calculator => "calculator",
            Self::Calendar => "calendar",
            Self::Search => "search",
            Self::Check => "check",
            Self::CheckSquare => "check-square",
            Self::Square => "square",
            Self::X => "x",
        }
    }

    /// Single-character stand-in for terminal renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ArrowUpDown => "↕",
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Filter => "⧩",
            Self::Calculator => "#",
            Self::Calendar => "▦",
            Self::Search => "⌕",
            Self::Check => "✓",
            Self::CheckSquare => "☑",
            Self::Square => "☐",
            Self::X => "×",
        }
    }
}
