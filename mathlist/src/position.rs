//! Path-based addressing of cursor positions inside the atom tree.
//!
//! A [`Position`] names a location *between* atoms at some level of the
//! tree: zero or more [`Hop`]s descending from the root list, then a final
//! atom index at the innermost level. Positions are cheap immutable values;
//! every operation here is a pure value transform that never touches a
//! tree. Validity against a concrete tree is only established when a
//! position is resolved (see [`MathList::atom_at`](crate::MathList::atom_at)
//! and [`MathList::list_at`](crate::MathList::list_at)).

use smallvec::SmallVec;
use std::fmt;

/// Which named child list a hop descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Subscript,
    Superscript,
    /// Synthetic waypoint between an atom's nucleus and its scripts. Used
    /// only to sequence cursor movement; nothing is ever stored under it.
    BetweenBaseAndScripts,
    Numerator,
    Denominator,
    Radicand,
    Degree,
}

impl SlotKind {
    fn short_name(self) -> &'static str {
        match self {
            Self::Subscript => "sub",
            Self::Superscript => "sup",
            Self::BetweenBaseAndScripts => "mid",
            Self::Numerator => "num",
            Self::Denominator => "den",
            Self::Radicand => "rad",
            Self::Degree => "deg",
        }
    }
}

/// One descent step: the atom index at the current level and the slot of
/// that atom the path continues into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop {
    pub index: usize,
    pub slot: SlotKind,
}

/// An immutable cursor path. See the module docs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    hops: SmallVec<[Hop; 4]>,
    index: usize,
}

impl Position {
    /// A position at the root level, before the atom at `index`.
    pub fn root(index: usize) -> Self {
        Self {
            hops: SmallVec::new(),
            index,
        }
    }

    /// The atom index at the innermost level.
    pub fn final_index(&self) -> usize {
        self.index
    }

    /// The atom index at the root level: the first hop's index, or the
    /// final index when the position is not nested.
    pub fn top_index(&self) -> usize {
        self.hops.first().map_or(self.index, |hop| hop.index)
    }

    /// The slot-kind of the last hop, or `None` at the root level.
    pub fn final_slot_kind(&self) -> Option<SlotKind> {
        self.hops.last().map(|hop| hop.slot)
    }

    pub fn is_root_level(&self) -> bool {
        self.hops.is_empty()
    }

    /// Number of hops between the root level and this position's level.
    pub fn depth(&self) -> usize {
        self.hops.len()
    }

    /// The descent steps from the root level, outermost first.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Pops the last hop; the final index becomes the popped hop's atom
    /// index. `None` when already at the root level.
    pub fn level_down(&self) -> Option<Self> {
        let (last, rest) = self.hops.split_last()?;
        Some(Self {
            hops: SmallVec::from_slice(rest),
            index: last.index,
        })
    }

    /// Pushes a hop through the atom at the final index into `slot`,
    /// landing at `child_index` inside it.
    pub fn level_up_with_slot(&self, slot: SlotKind, child_index: usize) -> Self {
        let mut hops = self.hops.clone();
        hops.push(Hop {
            index: self.index,
            slot,
        });
        Self {
            hops,
            index: child_index,
        }
    }

    /// The adjacent position before this one at the same level, or `None`
    /// at index 0.
    pub fn previous(&self) -> Option<Self> {
        if self.index == 0 {
            return None;
        }
        let mut previous = self.clone();
        previous.index -= 1;
        Some(previous)
    }

    /// The adjacent position after this one at the same level.
    pub fn next(&self) -> Self {
        let mut next = self.clone();
        next.index += 1;
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hop in &self.hops {
            write!(f, "{}.{}.", hop.index, hop.slot.short_name())?;
        }
        write!(f, "{}", self.index)
    }
}
