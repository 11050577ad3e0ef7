use std::ops::{BitOr, BitOrAssign};

/// Facts about the node being rendered, computed by its parent.
///
/// A small bit set; combine flags with `|` and test with
/// [`OutputContext::contains`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputContext(u8);

impl OutputContext {
    /// No flags.
    pub const EMPTY: Self = Self(0);
    /// The only rendered child of the document root.
    pub const SINGLE_CHILD_IN_ROOT: Self = Self(1 << 0);
    /// First rendered child of its parent.
    pub const FIRST_CHILD: Self = Self(1 << 1);
    /// Last rendered child of its parent.
    pub const FINAL_CHILD: Self = Self(1 << 2);
    /// Direct child of an unordered list.
    pub const UNORDERED_LIST: Self = Self(1 << 3);
    /// Direct child of an ordered list.
    pub const ORDERED_LIST: Self = Self(1 << 4);
    /// Somewhere inside `pre`.
    pub const PREFORMATTED: Self = Self(1 << 5);
    /// Somewhere inside `code`.
    pub const CODE: Self = Self(1 << 6);

    /// Flags a parent hands down to all descendants, not just its children.
    pub const INHERITED: Self = Self(Self::PREFORMATTED.0 | Self::CODE.0);

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if at least one flag in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Flags set in both.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Flags set in either.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Context for the child at `index` of `count` rendered siblings.
    #[must_use]
    pub const fn for_position(index: usize, count: usize) -> Self {
        let mut context = Self::EMPTY;
        if index == 0 {
            context = context.union(Self::FIRST_CHILD);
        }
        if index + 1 == count {
            context = context.union(Self::FINAL_CHILD);
        }
        context
    }
}

impl BitOr for OutputContext {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for OutputContext {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
