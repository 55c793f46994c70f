//! Formula atoms: the nodes of the math list tree.
//!
//! An [`Atom`] couples a display nucleus with a [`AtomKind`] describing its
//! structural role. Kinds that own child lists (fractions, radicals) carry
//! them as enum payloads, so a fraction without a numerator or a radical
//! without a radicand is unrepresentable.

use crate::{list::MathList, position::SlotKind};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Glyph used for a placeholder nobody is editing.
pub const PLACEHOLDER_HOLLOW: &str = "\u{25A1}";

/// Glyph used for the placeholder under the cursor.
pub const PLACEHOLDER_FILLED: &str = "\u{25A0}";

/// Structural role of an atom, as a closed sum type.
///
/// Every kind may additionally carry a superscript and a subscript; those
/// live on [`Atom`] itself since they are kind-independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtomKind {
    /// A plain glyph with no special role.
    Ordinary,
    /// A digit or digit run.
    Number,
    /// A named quantity (latin or greek letter).
    Variable,
    /// A named function rendered upright, e.g. `sin` or `log`.
    LargeOperator,
    /// An infix operator, e.g. `+` or `×`.
    BinaryOperator,
    /// A prefix operator.
    UnaryOperator,
    /// A relation, e.g. `=` or `<`.
    Relation,
    /// An opening bracket.
    Open,
    /// A closing bracket. `has_matching_open` mirrors the bracket balance as
    /// of the last presentation scan; it is advisory and consumed only by
    /// the slash-to-fraction heuristic.
    Close { has_matching_open: bool },
    /// A punctuation mark, e.g. `,`.
    Punctuation,
    /// An editable empty slot, shown hollow or filled, never meaningful
    /// content.
    Placeholder,
    /// A fraction. Both child lists exist for the whole life of the atom.
    Fraction {
        numerator: MathList,
        denominator: MathList,
    },
    /// A radical. The radicand always exists; the degree is optional.
    Radical {
        degree: Option<MathList>,
        radicand: MathList,
    },
}

/// One node of the formula tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub kind: AtomKind,
    /// Display text. Mutable only for presentation (placeholder glyph
    /// toggling); never semantically meaningful for fractions or radicals.
    pub nucleus: SmolStr,
    pub superscript: Option<MathList>,
    pub subscript: Option<MathList>,
}

impl Atom {
    pub fn new(kind: AtomKind, nucleus: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            nucleus: nucleus.into(),
            superscript: None,
            subscript: None,
        }
    }

    pub fn ordinary(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Ordinary, nucleus)
    }

    pub fn number(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Number, nucleus)
    }

    pub fn variable(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Variable, nucleus)
    }

    pub fn large_operator(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::LargeOperator, nucleus)
    }

    pub fn binary_operator(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::BinaryOperator, nucleus)
    }

    pub fn unary_operator(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::UnaryOperator, nucleus)
    }

    pub fn relation(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Relation, nucleus)
    }

    pub fn open(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Open, nucleus)
    }

    pub fn close(nucleus: impl Into<SmolStr>, has_matching_open: bool) -> Self {
        Self::new(AtomKind::Close { has_matching_open }, nucleus)
    }

    pub fn punctuation(nucleus: impl Into<SmolStr>) -> Self {
        Self::new(AtomKind::Punctuation, nucleus)
    }

    pub fn placeholder() -> Self {
        Self::new(AtomKind::Placeholder, PLACEHOLDER_HOLLOW)
    }

    /// The multiplication sign inserted by the multiply key and by the
    /// slash heuristic between adjacent fractions.
    pub fn times() -> Self {
        Self::binary_operator("\u{00D7}")
    }

    pub fn fraction(numerator: MathList, denominator: MathList) -> Self {
        Self::new(
            AtomKind::Fraction {
                numerator,
                denominator,
            },
            "",
        )
    }

    pub fn radical(degree: Option<MathList>, radicand: MathList) -> Self {
        Self::new(AtomKind::Radical { degree, radicand }, "")
    }

    /// A list holding a single hollow placeholder, the initial content of
    /// every freshly created slot.
    pub fn placeholder_list() -> MathList {
        MathList::from(vec![Self::placeholder()])
    }

    /// Fraction preset: placeholder numerator and denominator.
    pub fn placeholder_fraction() -> Self {
        Self::fraction(Self::placeholder_list(), Self::placeholder_list())
    }

    /// Square root preset: no degree, placeholder radicand.
    pub fn placeholder_square_root() -> Self {
        Self::radical(None, Self::placeholder_list())
    }

    /// Cube root preset: literal degree `3`, placeholder radicand.
    pub fn placeholder_cube_root() -> Self {
        Self::radical(
            Some(MathList::from(vec![Self::number("3")])),
            Self::placeholder_list(),
        )
    }

    /// Nth-root preset: placeholder degree and radicand; the cursor is
    /// expected to enter the degree first.
    pub fn placeholder_nth_root() -> Self {
        Self::radical(Some(Self::placeholder_list()), Self::placeholder_list())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, AtomKind::Placeholder)
    }

    pub fn has_scripts(&self) -> bool {
        self.superscript.is_some() || self.subscript.is_some()
    }

    /// The child list stored under `slot`, if this atom has one.
    ///
    /// [`SlotKind::BetweenBaseAndScripts`] is a navigation waypoint, not a
    /// storage slot, and always yields `None`.
    pub fn slot(&self, slot: SlotKind) -> Option<&MathList> {
        match slot {
            SlotKind::Superscript => self.superscript.as_ref(),
            SlotKind::Subscript => self.subscript.as_ref(),
            SlotKind::BetweenBaseAndScripts => None,
            SlotKind::Numerator => match &self.kind {
                AtomKind::Fraction { numerator, .. } => Some(numerator),
                _ => None,
            },
            SlotKind::Denominator => match &self.kind {
                AtomKind::Fraction { denominator, .. } => Some(denominator),
                _ => None,
            },
            SlotKind::Radicand => match &self.kind {
                AtomKind::Radical { radicand, .. } => Some(radicand),
                _ => None,
            },
            SlotKind::Degree => match &self.kind {
                AtomKind::Radical { degree, .. } => degree.as_ref(),
                _ => None,
            },
        }
    }

    pub fn slot_mut(&mut self, slot: SlotKind) -> Option<&mut MathList> {
        match slot {
            SlotKind::Superscript => self.superscript.as_mut(),
            SlotKind::Subscript => self.subscript.as_mut(),
            SlotKind::BetweenBaseAndScripts => None,
            SlotKind::Numerator => match &mut self.kind {
                AtomKind::Fraction { numerator, .. } => Some(numerator),
                _ => None,
            },
            SlotKind::Denominator => match &mut self.kind {
                AtomKind::Fraction { denominator, .. } => Some(denominator),
                _ => None,
            },
            SlotKind::Radicand => match &mut self.kind {
                AtomKind::Radical { radicand, .. } => Some(radicand),
                _ => None,
            },
            SlotKind::Degree => match &mut self.kind {
                AtomKind::Radical { degree, .. } => degree.as_mut(),
                _ => None,
            },
        }
    }
}
