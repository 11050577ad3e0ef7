use std::ops::{BitOr, BitOrAssign};

use strum_macros::{Display, EnumString, IntoStaticStr};

/// Output flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum RenderMode {
    /// Markdown with emphasis, links, lists and code fences.
    #[default]
    Markdown,
    /// The same layout with all Markdown decoration removed.
    RawText,
}

/// Independent rendering switches; any combination is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions(u8);

impl RenderOptions {
    /// No switches.
    pub const NONE: Self = Self(0);
    /// Use `•` instead of `*` for unordered list items (Markdown only).
    pub const UNORDERED_LIST_BULLETS: Self = Self(1 << 0);
    /// Backslash-escape `*`, `[`, `]`, `` ` `` and `_` in text (Markdown only).
    pub const ESCAPE_MARKDOWN: Self = Self(1 << 1);
    /// Honour the `invisible` and `ellipsis` span classes that some sites,
    /// Mastodon among them, use to shorten long links.
    pub const SITE_QUIRKS: Self = Self(1 << 2);
    /// Emit a link's text instead of its URL (raw text only).
    pub const KEEP_LINK_TEXT: Self = Self(1 << 3);

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every switch in `other` is on.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Switches on in either.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// `self` with `other` turned on or off.
    #[must_use]
    pub const fn with(self, other: Self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | other.0)
        } else {
            Self(self.0 & !other.0)
        }
    }
}

impl BitOr for RenderOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for RenderOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
