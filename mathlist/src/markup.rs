//! One-directional markup rendering of a math list.
//!
//! Produces a compact LaTeX-flavoured string: structural atoms use
//! `\frac` / `\sqrt`, everything else contributes its nucleus, scripts
//! render as `^{..}` / `_{..}`. This is a presentation view only — parsing
//! markup back into a tree is a separate collaborator.

use crate::{
    atom::{Atom, AtomKind},
    list::MathList,
};
use std::fmt;

/// Renders the whole tree as markup.
pub fn tree_to_markup(list: &MathList) -> String {
    list.to_string()
}

impl fmt::Display for MathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in self {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AtomKind::Fraction {
                numerator,
                denominator,
            } => write!(f, "\\frac{{{numerator}}}{{{denominator}}}")?,
            AtomKind::Radical {
                degree: Some(degree),
                radicand,
            } => write!(f, "\\sqrt[{degree}]{{{radicand}}}")?,
            AtomKind::Radical {
                degree: None,
                radicand,
            } => write!(f, "\\sqrt{{{radicand}}}")?,
            _ => write!(f, "{}", self.nucleus)?,
        }
        if let Some(superscript) = &self.superscript {
            write!(f, "^{{{superscript}}}")?;
        }
        if let Some(subscript) = &self.subscript {
            write!(f, "_{{{subscript}}}")?;
        }
        Ok(())
    }
}
