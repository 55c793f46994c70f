//! Keystroke-level structural operations.
//!
//! Each method maps to one keystroke category and is built from the
//! position-aware primitives on [`MathList`]. The session dispatches here
//! and runs the presentation pass afterwards.

use crate::session::{EditorError, Session};
use nabla_mathlist::{Atom, AtomKind, ListRange, MathList, SlotKind, TreeError};
use tracing::trace;

/// Kinds a bare script cannot attach to; the script rides on a fresh
/// placeholder instead.
fn needs_script_carrier(kind: &AtomKind) -> bool {
    matches!(
        kind,
        AtomKind::BinaryOperator
            | AtomKind::UnaryOperator
            | AtomKind::Relation
            | AtomKind::Open
            | AtomKind::Punctuation
    )
}

impl Session {
    /// Insert a resolved atom at the cursor. Fractions drop the cursor
    /// into their numerator; everything else advances past itself.
    pub(crate) fn insert_atom(&mut self, atom: Atom) -> Result<(), EditorError> {
        let advance = match &atom.kind {
            AtomKind::Fraction { .. } => Some(SlotKind::Numerator),
            _ => None,
        };
        self.list
            .insert_and_advance(&mut self.insertion, atom, advance)?;
        Ok(())
    }

    /// Insert the atom a character resolves to, falling back to a literal
    /// ordinary atom for characters the table does not know.
    pub(crate) fn insert_character(&mut self, ch: char) -> Result<(), EditorError> {
        let atom = self
            .symbols
            .lookup_by_character(ch)
            .unwrap_or_else(|| Atom::ordinary(ch.to_string()));
        self.insert_atom(atom)
    }

    /// Insert a named symbol. A miss here is a configuration fault, not a
    /// fallback case.
    pub(crate) fn insert_symbol_name(&mut self, name: &str) -> Result<(), EditorError> {
        let atom = self
            .symbols
            .lookup_by_symbol_name(name)
            .ok_or_else(|| EditorError::UnknownSymbol { name: name.into() })?;
        self.insert_atom(atom)
    }

    /// Attach a script to the preceding atom and move into it, or insert a
    /// placeholder carrier when there is nothing suitable to script.
    pub(crate) fn create_script(&mut self, is_superscript: bool) -> Result<(), EditorError> {
        let slot = if is_superscript {
            SlotKind::Superscript
        } else {
            SlotKind::Subscript
        };
        let at_waypoint =
            self.insertion.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts);
        // At the waypoint the script target is the base one level down;
        // otherwise it is the previous atom at this level.
        let target = match (at_waypoint, self.insertion.previous()) {
            (true, _) => self.insertion.level_down().ok_or(TreeError::LevelBelowRoot)?,
            (false, Some(previous)) => previous,
            (false, None) => return self.insert_script_carrier(slot),
        };
        {
            let atom = self
                .list
                .atom_at(&target)
                .ok_or_else(|| TreeError::UnresolvedPosition {
                    position: target.clone(),
                })?;
            if !at_waypoint && needs_script_carrier(&atom.kind) {
                return self.insert_script_carrier(slot);
            }
        }
        let entry_index = {
            let atom =
                self.list
                    .atom_at_mut(&target)
                    .ok_or_else(|| TreeError::UnresolvedPosition {
                        position: target.clone(),
                    })?;
            let script = match slot {
                SlotKind::Superscript => &mut atom.superscript,
                _ => &mut atom.subscript,
            };
            match script {
                Some(existing) => existing.len(),
                None => {
                    *script = Some(Atom::placeholder_list());
                    0
                }
            }
        };
        self.insertion = target.level_up_with_slot(slot, entry_index);
        Ok(())
    }

    fn insert_script_carrier(&mut self, slot: SlotKind) -> Result<(), EditorError> {
        let mut carrier = Atom::placeholder();
        match slot {
            SlotKind::Superscript => carrier.superscript = Some(Atom::placeholder_list()),
            _ => carrier.subscript = Some(Atom::placeholder_list()),
        }
        self.list
            .insert_and_advance(&mut self.insertion, carrier, Some(slot))?;
        Ok(())
    }

    /// Insert a radical preset. A placeholder degree puts the cursor in
    /// the degree; otherwise the cursor enters the radicand of a square or
    /// cube root.
    pub(crate) fn create_radical(
        &mut self,
        degree_is_placeholder: bool,
        degree_is_three: bool,
    ) -> Result<(), EditorError> {
        if degree_is_placeholder {
            self.list.insert_and_advance(
                &mut self.insertion,
                Atom::placeholder_nth_root(),
                Some(SlotKind::Degree),
            )?;
        } else {
            let preset = if degree_is_three {
                Atom::placeholder_cube_root()
            } else {
                Atom::placeholder_square_root()
            };
            self.list
                .insert_and_advance(&mut self.insertion, preset, Some(SlotKind::Radicand))?;
        }
        Ok(())
    }

    /// The slash key: fold the expression before the cursor into the
    /// numerator of a new fraction and leave the cursor in its
    /// denominator.
    ///
    /// The backward scan stays at the cursor's level and stops, without
    /// consuming the stopping atom, at a depth-0 binary operator, relation
    /// or fraction, or at an open bracket the scan has already stepped out
    /// of. Matched close brackets carry the scan across whole groups.
    pub(crate) fn slash_to_fraction(&mut self) -> Result<(), EditorError> {
        if self.insertion.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
            self.insertion = self
                .insertion
                .level_down()
                .ok_or(TreeError::LevelBelowRoot)?
                .next();
        }
        let mut numerator = MathList::new();
        let mut open_depth = 0i32;
        while let Some(previous) = self.insertion.previous() {
            let atom =
                self.list
                    .atom_at(&previous)
                    .ok_or_else(|| TreeError::UnresolvedPosition {
                        position: previous.clone(),
                    })?;
            match &atom.kind {
                AtomKind::Open => open_depth -= 1,
                AtomKind::Close {
                    has_matching_open: true,
                } => open_depth += 1,
                _ => {}
            }
            let stops = match &atom.kind {
                AtomKind::BinaryOperator | AtomKind::Relation | AtomKind::Fraction { .. } => {
                    open_depth == 0
                }
                AtomKind::Open => open_depth < 0,
                _ => false,
            };
            if stops {
                break;
            }
            numerator.insert(0, atom.clone());
            self.insertion = previous;
        }
        trace!(consumed = numerator.len(), "slash numerator scan");
        self.list
            .remove_range(&ListRange::new(self.insertion.clone(), numerator.len()))?;
        if numerator.is_empty() {
            // Nothing usable before the cursor: the numerator is a
            // literal 1.
            numerator.push(Atom::number("1"));
            if let Some(previous) = self.insertion.previous() {
                let prior_is_fraction = matches!(
                    self.list.atom_at(&previous).map(|atom| &atom.kind),
                    Some(AtomKind::Fraction { .. })
                );
                if prior_is_fraction {
                    // Keep two adjacent fractions from reading as one.
                    self.list
                        .insert_and_advance(&mut self.insertion, Atom::times(), None)?;
                }
            }
        }
        let fraction = Atom::fraction(numerator, Atom::placeholder_list());
        self.list
            .insert_and_advance(&mut self.insertion, fraction, Some(SlotKind::Denominator))?;
        Ok(())
    }

    /// Insert two atoms as a pair and leave the cursor strictly between
    /// them, so continued typing lands inside. A pair landing at the
    /// scripts waypoint backs out one level instead.
    pub(crate) fn insert_pair(&mut self, left: Atom, right: Atom) -> Result<(), EditorError> {
        self.list
            .insert_and_advance(&mut self.insertion, left, None)?;
        self.list
            .insert_and_advance(&mut self.insertion, right, None)?;
        self.insertion =
            if self.insertion.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
                self.insertion.level_down().ok_or(TreeError::LevelBelowRoot)?
            } else {
                self.insertion
                    .previous()
                    .ok_or_else(|| TreeError::UnresolvedPosition {
                        position: self.insertion.clone(),
                    })?
            };
        Ok(())
    }

    /// Backspace: delete the atom before the cursor. At the start of a
    /// level there is nothing before the cursor and this is a no-op.
    pub(crate) fn delete_backwards(&mut self) -> Result<(), EditorError> {
        if !self.has_content() {
            return Ok(());
        }
        if self.insertion.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
            // The thing before the waypoint is the base's nucleus.
            self.list.remove_at(&mut self.insertion)?;
            return Ok(());
        }
        let Some(previous) = self.insertion.previous() else {
            return Ok(());
        };
        self.insertion = previous;
        self.list.remove_at(&mut self.insertion)?;
        Ok(())
    }
}
