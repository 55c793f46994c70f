//! Position-aware structural edits on a math list tree.
//!
//! These are the primitives the editing session builds its keystroke
//! operations out of: insert an atom at a position and advance, remove the
//! atom under a position, remove a span. All of them keep the tree in a
//! state every reachable position still resolves against.

use crate::{
    atom::Atom,
    list::MathList,
    position::{Position, SlotKind},
    range::ListRange,
};
use snafu::Snafu;

/// Faults raised when a position and the tree have desynchronized.
///
/// These are contract violations, not recoverable outcomes: they can only
/// happen if a caller holds a stale position across an unrelated mutation
/// or an edit operation has a bug. They are never used for expected
/// control flow (end-of-level, absent neighbors and lookup fallbacks are
/// all handled without errors).
#[derive(Debug, Snafu)]
pub enum TreeError {
    #[snafu(display("index {index} is out of bounds for a list of length {len}"))]
    IndexOutOfBounds { index: usize, len: usize },

    #[snafu(display("atom at index {index} has no {slot:?} slot"))]
    MissingSlot { index: usize, slot: SlotKind },

    #[snafu(display("position {position} does not resolve to an atom"))]
    UnresolvedPosition { position: Position },

    #[snafu(display("cannot step below the root level"))]
    LevelBelowRoot,

    #[snafu(display("an atom inserted at the script waypoint cannot carry scripts of its own"))]
    ScriptedAtomAtWaypoint,
}

impl MathList {
    /// Inserts `atom` at `position` and moves `position` past it.
    ///
    /// With `advance` set, the position instead re-enters the inserted
    /// atom's named slot at index 0 — inserting a fraction with
    /// `Some(SlotKind::Numerator)` leaves the cursor inside the numerator.
    ///
    /// Two positional special cases:
    /// - an unscripted typing target that is a placeholder is replaced
    ///   rather than pushed aside (its scripts, if any, move onto the new
    ///   atom when that atom has none of its own);
    /// - inserting at the between-base-and-scripts waypoint transfers the
    ///   base's scripts onto the inserted atom, places it right after the
    ///   base, and leaves the position between the new atom's nucleus and
    ///   the transferred scripts.
    pub fn insert_and_advance(
        &mut self,
        position: &mut Position,
        mut atom: Atom,
        advance: Option<SlotKind>,
    ) -> Result<(), TreeError> {
        let at_waypoint = position.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts);
        let inserted = if at_waypoint {
            self.insert_at_waypoint(position, atom)?
        } else {
            if self.atom_at(position).is_some_and(Atom::is_placeholder) {
                let list = self.list_at_mut(position)?;
                let replaced = list.remove(position.final_index());
                if !atom.has_scripts() {
                    atom.superscript = replaced.superscript;
                    atom.subscript = replaced.subscript;
                }
            }
            let list = self.list_at_mut(position)?;
            let index = position.final_index();
            let len = list.len();
            if index > len {
                return Err(TreeError::IndexOutOfBounds { index, len });
            }
            list.insert(index, atom);
            position.clone()
        };
        *position = match advance {
            Some(slot) => inserted.level_up_with_slot(slot, 0),
            None if at_waypoint => {
                inserted.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1)
            }
            None => inserted.next(),
        };
        Ok(())
    }

    fn insert_at_waypoint(
        &mut self,
        position: &Position,
        mut atom: Atom,
    ) -> Result<Position, TreeError> {
        if atom.has_scripts() {
            return Err(TreeError::ScriptedAtomAtWaypoint);
        }
        let base_position = position.level_down().ok_or(TreeError::LevelBelowRoot)?;
        let base_index = base_position.final_index();
        let list = self.list_at_mut(&base_position)?;
        let len = list.len();
        let base = list.get_mut(base_index).ok_or(TreeError::IndexOutOfBounds {
            index: base_index,
            len,
        })?;
        if !base.has_scripts() {
            return Err(TreeError::MissingSlot {
                index: base_index,
                slot: SlotKind::BetweenBaseAndScripts,
            });
        }
        atom.superscript = base.superscript.take();
        atom.subscript = base.subscript.take();
        list.insert(base_index + 1, atom);
        Ok(base_position.next())
    }

    /// Removes the atom under `position`; the position then names the freed
    /// slot.
    ///
    /// Removing at the between-base-and-scripts waypoint deletes the base's
    /// nucleus: the scripts migrate onto a script-free previous atom when
    /// one exists (and the position lands at that atom's waypoint), else
    /// the base becomes a placeholder carrying the scripts (and the
    /// position lands before it).
    pub fn remove_at(&mut self, position: &mut Position) -> Result<(), TreeError> {
        if position.final_slot_kind() == Some(SlotKind::BetweenBaseAndScripts) {
            return self.remove_at_waypoint(position);
        }
        let list = self.list_at_mut(position)?;
        let index = position.final_index();
        let len = list.len();
        if index >= len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        list.remove(index);
        Ok(())
    }

    fn remove_at_waypoint(&mut self, position: &mut Position) -> Result<(), TreeError> {
        let base_position = position.level_down().ok_or(TreeError::LevelBelowRoot)?;
        let base_index = base_position.final_index();
        let list = self.list_at_mut(&base_position)?;
        let len = list.len();
        let base = list.get(base_index).ok_or(TreeError::IndexOutOfBounds {
            index: base_index,
            len,
        })?;
        if !base.has_scripts() {
            return Err(TreeError::MissingSlot {
                index: base_index,
                slot: SlotKind::BetweenBaseAndScripts,
            });
        }
        let merge_target = base_index
            .checked_sub(1)
            .filter(|&index| !list.atoms()[index].has_scripts());
        match merge_target {
            Some(previous_index) => {
                let base = list.remove(base_index);
                if let Some(previous) = list.get_mut(previous_index) {
                    previous.superscript = base.superscript;
                    previous.subscript = base.subscript;
                }
                if let Some(before_base) = base_position.previous() {
                    *position =
                        before_base.level_up_with_slot(SlotKind::BetweenBaseAndScripts, 1);
                }
            }
            None => {
                if let Some(base) = list.get_mut(base_index) {
                    let mut placeholder = Atom::placeholder();
                    placeholder.superscript = base.superscript.take();
                    placeholder.subscript = base.subscript.take();
                    *base = placeholder;
                }
                *position = base_position;
            }
        }
        Ok(())
    }

    /// Deletes the contiguous span named by `range` at its level. Positions
    /// held by other observers at or past the span must be re-derived by
    /// their owners; this core tracks only the one position the session
    /// feeds back in.
    pub fn remove_range(&mut self, range: &ListRange) -> Result<(), TreeError> {
        if range.is_empty() {
            return Ok(());
        }
        let list = self.list_at_mut(range.start())?;
        let len = list.len();
        let end = range.end_index();
        if end > len {
            return Err(TreeError::IndexOutOfBounds { index: end, len });
        }
        list.remove_span(range.start().final_index(), range.length());
        Ok(())
    }
}
