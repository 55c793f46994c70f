//! Cursor movement across arbitrary nesting.
//!
//! [`move_right`] and [`move_left`] take the tree and the current position
//! and produce the next position. Leaving a level follows a fixed priority
//! chain per slot-kind, written out as one exhaustive match per direction
//! so the order is auditable at a glance:
//!
//! - rightward exit: degree → radicand, numerator → denominator,
//!   radicand/denominator → scripts waypoint (when scripts exist),
//!   waypoint → superscript → subscript, then out past the atom;
//! - leftward entry: subscript → superscript → waypoint → radicand →
//!   degree → denominator → numerator, then before the atom.
//!
//! Two placeholder special cases are deliberately kept separate (they
//! apply to different positions): the waypoint of a placeholder is never a
//! resting point, and the right edge of a trailing unscripted placeholder
//! is skipped in both directions.

use nabla_mathlist::{Atom, AtomKind, MathList, Position, SlotKind, TreeError};

fn resolve<'a>(list: &'a MathList, position: &Position) -> Result<&'a Atom, TreeError> {
    list.atom_at(position)
        .ok_or_else(|| TreeError::UnresolvedPosition {
            position: position.clone(),
        })
}

/// The position one step to the right of `from`.
pub fn move_right(list: &MathList, from: &Position) -> Result<Position, TreeError> {
    let next = match list.atom_at(from) {
        // End of the current level: climb out.
        None => exit_level_right(list, from)?,
        // On the waypoint: the scripts come next.
        Some(atom) if from.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) => {
            let base = from.level_down().ok_or(TreeError::LevelBelowRoot)?;
            let slot = if atom.superscript.is_some() {
                SlotKind::Superscript
            } else {
                SlotKind::Subscript
            };
            base.level_up_with_slot(slot, 0)
        }
        Some(atom) => match &atom.kind {
            AtomKind::Fraction { .. } => from.level_up_with_slot(SlotKind::Numerator, 0),
            AtomKind::Radical { degree, .. } => {
                let slot = if degree.is_some() {
                    SlotKind::Degree
                } else {
                    SlotKind::Radicand
                };
                from.level_up_with_slot(slot, 0)
            }
            _ if atom.has_scripts() => {
                from.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1)
            }
            // Skip the right edge of a trailing placeholder.
            AtomKind::Placeholder if list.atom_at(&from.next()).is_none() => {
                exit_level_right(list, from)?
            }
            _ => from.next(),
        },
    };
    // Never rest on the waypoint of a placeholder; its scripts are entered
    // directly.
    if next.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
        if let Some(base) = next.level_down() {
            if list.atom_at(&base).is_some_and(Atom::is_placeholder) {
                return move_right(list, &next);
            }
        }
    }
    Ok(next)
}

/// Rightward exit chain: where the cursor lands after the end of a level,
/// keyed by the slot it is leaving.
fn exit_level_right(list: &MathList, from: &Position) -> Result<Position, TreeError> {
    let Some(slot) = from.final_slot_kind() else {
        // End of the root list; nowhere further to go.
        return Ok(from.clone());
    };
    let base = from.level_down().ok_or(TreeError::LevelBelowRoot)?;
    let atom = resolve(list, &base)?;
    let next = match slot {
        SlotKind::Degree => match &atom.kind {
            AtomKind::Radical { .. } => base.level_up_with_slot(SlotKind::Radicand, 0),
            _ => {
                return Err(TreeError::MissingSlot {
                    index: base.final_index(),
                    slot: SlotKind::Radicand,
                })
            }
        },
        SlotKind::Numerator => match &atom.kind {
            AtomKind::Fraction { .. } => base.level_up_with_slot(SlotKind::Denominator, 0),
            _ => {
                return Err(TreeError::MissingSlot {
                    index: base.final_index(),
                    slot: SlotKind::Denominator,
                })
            }
        },
        SlotKind::Radicand | SlotKind::Denominator => {
            if atom.has_scripts() {
                base.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1)
            } else {
                base.next()
            }
        }
        SlotKind::BetweenBaseAndScripts => {
            if atom.superscript.is_some() {
                base.level_up_with_slot(SlotKind::Superscript, 0)
            } else if atom.subscript.is_some() {
                base.level_up_with_slot(SlotKind::Subscript, 0)
            } else {
                base.next()
            }
        }
        SlotKind::Superscript => {
            if atom.subscript.is_some() {
                base.level_up_with_slot(SlotKind::Subscript, 0)
            } else {
                base.next()
            }
        }
        SlotKind::Subscript => base.next(),
    };
    Ok(next)
}

/// The position one step to the left of `from`.
pub fn move_left(list: &MathList, from: &Position) -> Result<Position, TreeError> {
    // The waypoint has no previous atom at its own level; leaving it goes
    // through the entry chain like a level start.
    let at_level_start =
        from.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) || from.previous().is_none();
    let next = if at_level_start {
        enter_level_left(list, from)?
    } else {
        let previous = from.previous().ok_or(TreeError::LevelBelowRoot)?;
        let atom = resolve(list, &previous)?;
        // Stepping backward onto a structured atom descends into its last
        // child list, most specific slot first.
        if let Some(subscript) = &atom.subscript {
            previous.level_up_with_slot(SlotKind::Subscript, subscript.len())
        } else if let Some(superscript) = &atom.superscript {
            previous.level_up_with_slot(SlotKind::Superscript, superscript.len())
        } else {
            match &atom.kind {
                AtomKind::Radical { radicand, .. } => {
                    previous.level_up_with_slot(SlotKind::Radicand, radicand.len())
                }
                AtomKind::Fraction { denominator, .. } => {
                    previous.level_up_with_slot(SlotKind::Denominator, denominator.len())
                }
                _ => previous,
            }
        }
    };
    // Landing on the waypoint of a placeholder selects the placeholder
    // instead.
    if next.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
        if let Some(base) = next.level_down() {
            if list.atom_at(&base).is_some_and(Atom::is_placeholder) {
                return Ok(base);
            }
        }
        return Ok(next);
    }
    // Skip the right edge of a trailing unscripted placeholder going left
    // too.
    if list.atom_at(&next).is_none() {
        if let Some(previous) = next.previous() {
            if list
                .atom_at(&previous)
                .is_some_and(|atom| atom.is_placeholder() && !atom.has_scripts())
            {
                return Ok(previous);
            }
        }
    }
    Ok(next)
}

/// Leftward entry chain: where the cursor lands when stepping back out of
/// the start of a level, keyed by the slot it is leaving.
fn enter_level_left(list: &MathList, from: &Position) -> Result<Position, TreeError> {
    let Some(slot) = from.final_slot_kind() else {
        // Start of the root list; nowhere further to go.
        return Ok(from.clone());
    };
    let base = from.level_down().ok_or(TreeError::LevelBelowRoot)?;
    let atom = resolve(list, &base)?;
    let next = match slot {
        SlotKind::Subscript => match &atom.superscript {
            Some(superscript) => base.level_up_with_slot(SlotKind::Superscript, superscript.len()),
            None => base.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1),
        },
        SlotKind::Superscript => base.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1),
        SlotKind::BetweenBaseAndScripts => match &atom.kind {
            AtomKind::Radical { radicand, .. } => {
                base.level_up_with_slot(SlotKind::Radicand, radicand.len())
            }
            AtomKind::Fraction { denominator, .. } => {
                base.level_up_with_slot(SlotKind::Denominator, denominator.len())
            }
            _ => before_degree_or_out(&base, atom),
        },
        SlotKind::Radicand => before_degree_or_out(&base, atom),
        SlotKind::Denominator => before_numerator_or_out(&base, atom),
        SlotKind::Degree | SlotKind::Numerator => base,
    };
    Ok(next)
}

fn before_degree_or_out(base: &Position, atom: &Atom) -> Position {
    match &atom.kind {
        AtomKind::Radical {
            degree: Some(degree),
            ..
        } => base.level_up_with_slot(SlotKind::Degree, degree.len()),
        _ => before_numerator_or_out(base, atom),
    }
}

fn before_numerator_or_out(base: &Position, atom: &Atom) -> Position {
    match &atom.kind {
        AtomKind::Fraction { numerator, .. } => {
            base.level_up_with_slot(SlotKind::Numerator, numerator.len())
        }
        _ => base.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nabla_mathlist::Atom;

    fn fraction_half() -> Atom {
        Atom::fraction(
            MathList::from(vec![Atom::number("1")]),
            MathList::from(vec![Atom::number("2")]),
        )
    }

    #[test]
    fn right_descends_into_a_fraction_numerator() {
        let list = MathList::from(vec![fraction_half()]);
        let next = move_right(&list, &Position::root(0)).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Numerator, 0)
        );
    }

    #[test]
    fn right_crosses_from_numerator_end_to_denominator_start() {
        let list = MathList::from(vec![fraction_half()]);
        let numerator_end = Position::root(0).level_up_with_slot(SlotKind::Numerator, 1);
        let next = move_right(&list, &numerator_end).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Denominator, 0)
        );
    }

    #[test]
    fn right_exits_a_fraction_after_the_denominator() {
        let list = MathList::from(vec![fraction_half(), Atom::variable("x")]);
        let denominator_end = Position::root(0).level_up_with_slot(SlotKind::Denominator, 1);
        let next = move_right(&list, &denominator_end).expect("move");
        assert_eq!(next, Position::root(1));
    }

    #[test]
    fn right_walks_degree_then_radicand() {
        let list = MathList::from(vec![Atom::placeholder_cube_root()]);
        let next = move_right(&list, &Position::root(0)).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Degree, 0)
        );

        let degree_end = Position::root(0).level_up_with_slot(SlotKind::Degree, 1);
        let next = move_right(&list, &degree_end).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Radicand, 0)
        );
    }

    #[test]
    fn right_pauses_at_the_waypoint_of_a_scripted_atom() {
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![Atom::number("2")]));
        let list = MathList::from(vec![x]);

        let waypoint = move_right(&list, &Position::root(0)).expect("move");
        assert_eq!(
            waypoint,
            Position::root(0).level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1)
        );

        let into_script = move_right(&list, &waypoint).expect("move");
        assert_eq!(
            into_script,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 0)
        );
    }

    #[test]
    fn right_leaves_superscript_into_subscript() {
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![Atom::number("2")]));
        x.subscript = Some(MathList::from(vec![Atom::number("0")]));
        let list = MathList::from(vec![x]);

        let superscript_end = Position::root(0).level_up_with_slot(SlotKind::Superscript, 1);
        let next = move_right(&list, &superscript_end).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Subscript, 0)
        );
    }

    #[test]
    fn right_at_root_end_stays_put() {
        let list = MathList::from(vec![Atom::variable("x")]);
        let end = Position::root(1);
        assert_eq!(move_right(&list, &end).expect("move"), end);
    }

    #[test]
    fn right_skips_a_trailing_placeholder_edge() {
        // Cursor before the lone placeholder of a superscript: one step
        // exits the script entirely instead of stopping after the
        // placeholder.
        let mut x = Atom::variable("x");
        x.superscript = Some(Atom::placeholder_list());
        let list = MathList::from(vec![x, Atom::variable("y")]);

        let before_placeholder = Position::root(0).level_up_with_slot(SlotKind::Superscript, 0);
        let next = move_right(&list, &before_placeholder).expect("move");
        assert_eq!(next, Position::root(1));
    }

    #[test]
    fn right_never_rests_on_a_placeholder_waypoint() {
        let mut placeholder = Atom::placeholder();
        placeholder.superscript = Some(MathList::from(vec![Atom::number("2")]));
        let list = MathList::from(vec![placeholder]);

        let next = move_right(&list, &Position::root(0)).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 0)
        );
    }

    #[test]
    fn left_mirrors_the_fraction_walk() {
        let list = MathList::from(vec![fraction_half()]);

        let after = Position::root(1);
        let denominator_end = move_left(&list, &after).expect("move");
        assert_eq!(
            denominator_end,
            Position::root(0).level_up_with_slot(SlotKind::Denominator, 1)
        );

        let denominator_start = Position::root(0).level_up_with_slot(SlotKind::Denominator, 0);
        let numerator_end = move_left(&list, &denominator_start).expect("move");
        assert_eq!(
            numerator_end,
            Position::root(0).level_up_with_slot(SlotKind::Numerator, 1)
        );

        let numerator_start = Position::root(0).level_up_with_slot(SlotKind::Numerator, 0);
        let before = move_left(&list, &numerator_start).expect("move");
        assert_eq!(before, Position::root(0));
    }

    #[test]
    fn left_from_subscript_start_visits_superscript_then_waypoint() {
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![Atom::number("2")]));
        x.subscript = Some(MathList::from(vec![Atom::number("0")]));
        let list = MathList::from(vec![x]);

        let subscript_start = Position::root(0).level_up_with_slot(SlotKind::Subscript, 0);
        let superscript_end = move_left(&list, &subscript_start).expect("move");
        assert_eq!(
            superscript_end,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 1)
        );

        let superscript_start = Position::root(0).level_up_with_slot(SlotKind::Superscript, 0);
        let waypoint = move_left(&list, &superscript_start).expect("move");
        assert_eq!(
            waypoint,
            Position::root(0).level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1)
        );

        let before = move_left(&list, &waypoint).expect("move");
        assert_eq!(before, Position::root(0));
    }

    #[test]
    fn left_at_root_start_stays_put() {
        let list = MathList::from(vec![Atom::variable("x")]);
        let start = Position::root(0);
        assert_eq!(move_left(&list, &start).expect("move"), start);
    }

    #[test]
    fn left_steps_into_a_trailing_script_from_behind() {
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![Atom::number("2")]));
        let list = MathList::from(vec![x]);

        let after = Position::root(1);
        let next = move_left(&list, &after).expect("move");
        assert_eq!(
            next,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 1)
        );
    }

    #[test]
    fn left_selects_a_placeholder_instead_of_its_waypoint() {
        let mut placeholder = Atom::placeholder();
        placeholder.superscript = Some(MathList::from(vec![Atom::number("2")]));
        let list = MathList::from(vec![placeholder]);

        // From the superscript start, the chain would land on the
        // placeholder's waypoint; the post-check lands on the placeholder
        // itself.
        let superscript_start = Position::root(0).level_up_with_slot(SlotKind::Superscript, 0);
        let next = move_left(&list, &superscript_start).expect("move");
        assert_eq!(next, Position::root(0));
    }

    #[test]
    fn left_skips_a_trailing_unscripted_placeholder_edge() {
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![
            Atom::number("2"),
            Atom::placeholder(),
        ]));
        let list = MathList::from(vec![x, Atom::variable("y")]);

        // From after y, stepping left lands at the superscript end, whose
        // predecessor is an unscripted placeholder: the cursor lands
        // before the placeholder instead of on its right edge.
        let after_y = Position::root(2);
        let first = move_left(&list, &after_y).expect("move");
        assert_eq!(first, Position::root(1));

        let second = move_left(&list, &first).expect("move");
        assert_eq!(
            second,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 1)
        );
    }

    #[test]
    fn left_round_trip_documents_the_placeholder_skip_exception() {
        // A rightward step over a trailing placeholder edge is not
        // round-trippable position-for-position: going back lands before
        // the placeholder, not on the edge the skip jumped over.
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![
            Atom::number("2"),
            Atom::placeholder(),
        ]));
        let list = MathList::from(vec![x]);

        let edge = Position::root(0).level_up_with_slot(SlotKind::Superscript, 2);
        let back = move_left(&list, &edge).expect("move");
        assert_eq!(
            back,
            Position::root(0).level_up_with_slot(SlotKind::Superscript, 1)
        );
    }

    #[test]
    fn round_trip_holds_away_from_placeholder_skips() {
        // move_left(move_right(p)) == p for positions whose rightward step
        // does not cross a placeholder skip. The skip cases are exercised
        // separately above; they are intentionally not round-trippable.
        let mut x = Atom::variable("x");
        x.superscript = Some(MathList::from(vec![Atom::number("2")]));
        let list = MathList::from(vec![
            Atom::number("3"),
            x,
            fraction_half(),
            Atom::placeholder_cube_root(),
        ]);

        let mut position = Position::root(0);
        for _ in 0..16 {
            let stepped = move_right(&list, &position).expect("right");
            if stepped == position {
                break;
            }
            let back = move_left(&list, &stepped).expect("left");
            assert_eq!(back, position, "round trip broke at {position}");
            position = stepped;
        }
    }
}
