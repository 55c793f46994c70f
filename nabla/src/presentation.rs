//! Placeholder visualization and the advisory bracket scan.
//!
//! Runs after every mutation, never mutating structure: every placeholder
//! glyph is reset to hollow (the session then fills the one under the
//! cursor), and every close bracket's has-matching-open flag is refreshed
//! from a per-level balance scan. The walk visits every child list at any
//! depth and is idempotent between mutations.

use nabla_mathlist::{AtomKind, MathList, PLACEHOLDER_HOLLOW};

/// Resets placeholder glyphs and bracket-balance flags across the whole
/// tree.
pub(crate) fn prepare(list: &mut MathList) {
    let mut open_depth = 0usize;
    for atom in list.iter_mut() {
        if atom.is_placeholder() {
            atom.nucleus = PLACEHOLDER_HOLLOW.into();
        }
        match &mut atom.kind {
            AtomKind::Open => open_depth += 1,
            AtomKind::Close { has_matching_open } => {
                *has_matching_open = open_depth > 0;
                open_depth = open_depth.saturating_sub(1);
            }
            AtomKind::Fraction {
                numerator,
                denominator,
            } => {
                prepare(numerator);
                prepare(denominator);
            }
            AtomKind::Radical { degree, radicand } => {
                if let Some(degree) = degree {
                    prepare(degree);
                }
                prepare(radicand);
            }
            _ => {}
        }
        if let Some(superscript) = &mut atom.superscript {
            prepare(superscript);
        }
        if let Some(subscript) = &mut atom.subscript {
            prepare(subscript);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nabla_mathlist::{Atom, PLACEHOLDER_FILLED};

    #[test]
    fn placeholders_reset_to_hollow_at_every_depth() {
        let mut filled = Atom::placeholder();
        filled.nucleus = PLACEHOLDER_FILLED.into();
        let mut list = MathList::from(vec![Atom::fraction(
            MathList::from(vec![filled]),
            Atom::placeholder_list(),
        )]);

        prepare(&mut list);

        let AtomKind::Fraction { numerator, .. } = &list.atoms()[0].kind else {
            panic!("expected a fraction");
        };
        assert_eq!(numerator.atoms()[0].nucleus, PLACEHOLDER_HOLLOW);
    }

    #[test]
    fn close_brackets_learn_whether_they_match() {
        let mut list = MathList::from(vec![
            Atom::close(")", true),
            Atom::open("("),
            Atom::close(")", false),
        ]);

        prepare(&mut list);

        assert!(matches!(
            list.atoms()[0].kind,
            AtomKind::Close {
                has_matching_open: false
            }
        ));
        assert!(matches!(
            list.atoms()[2].kind,
            AtomKind::Close {
                has_matching_open: true
            }
        ));
    }

    #[test]
    fn the_scan_is_per_level() {
        // An open bracket at the root does not balance a close bracket
        // inside a numerator.
        let mut list = MathList::from(vec![
            Atom::open("("),
            Atom::fraction(
                MathList::from(vec![Atom::close(")", true)]),
                MathList::from(vec![Atom::number("2")]),
            ),
        ]);

        prepare(&mut list);

        let AtomKind::Fraction { numerator, .. } = &list.atoms()[1].kind else {
            panic!("expected a fraction");
        };
        assert!(matches!(
            numerator.atoms()[0].kind,
            AtomKind::Close {
                has_matching_open: false
            }
        ));
    }

    #[test]
    fn the_pass_is_idempotent() {
        let mut list = MathList::from(vec![
            Atom::open("("),
            Atom::placeholder(),
            Atom::close(")", false),
        ]);

        prepare(&mut list);
        let once = list.clone();
        prepare(&mut list);
        assert_eq!(list, once);
    }
}
