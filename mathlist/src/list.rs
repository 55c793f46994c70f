//! Ordered atom sequences and position resolution.
//!
//! A [`MathList`] is the unit owned by every slot in the tree: the root
//! list, and any script / numerator / denominator / radicand / degree slot.
//! A list exclusively owns its atoms and atoms exclusively own their child
//! lists, so the whole structure is a plain recursive owned tree.

use crate::{
    atom::Atom,
    editing::TreeError,
    position::{Position, SlotKind},
};
use serde::{Deserialize, Serialize};

/// An ordered, insertion-order-significant sequence of atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathList {
    atoms: Vec<Atom>,
}

impl MathList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// Inserts at `index`, shifting the tail right. `index` must be at most
    /// `len`; positions feeding into this are bounds-checked by the editing
    /// layer first.
    pub fn insert(&mut self, index: usize, atom: Atom) {
        self.atoms.insert(index, atom);
    }

    pub fn remove(&mut self, index: usize) -> Atom {
        self.atoms.remove(index)
    }

    /// Removes `count` atoms starting at `start`, shifting the tail left.
    pub fn remove_span(&mut self, start: usize, count: usize) {
        self.atoms.drain(start..start + count);
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Atom> {
        self.atoms.iter_mut()
    }

    /// Resolves a position to the atom directly under it.
    ///
    /// `None` means end-of-level: the position is one past the last atom of
    /// its level. A position whose final hop is the
    /// [`BetweenBaseAndScripts`](SlotKind::BetweenBaseAndScripts) waypoint
    /// resolves to the base atom the waypoint belongs to.
    ///
    /// This resolver is lenient: a hop that does not match the concrete
    /// tree also yields `None`. Use [`Self::list_at`] where a broken hop
    /// must surface as the fault it is.
    pub fn atom_at(&self, position: &Position) -> Option<&Atom> {
        let hops = position.hops();
        let mut list = self;
        for (depth, hop) in hops.iter().enumerate() {
            let atom = list.atoms.get(hop.index)?;
            if hop.slot == SlotKind::BetweenBaseAndScripts {
                // The waypoint names the base atom itself; nothing deeper
                // is addressable through it.
                return (depth + 1 == hops.len()).then_some(atom);
            }
            list = atom.slot(hop.slot)?;
        }
        list.atoms.get(position.final_index())
    }

    /// Mutable twin of [`Self::atom_at`].
    pub fn atom_at_mut(&mut self, position: &Position) -> Option<&mut Atom> {
        let hops = position.hops();
        let mut list = self;
        for (depth, hop) in hops.iter().enumerate() {
            let atom = list.atoms.get_mut(hop.index)?;
            if hop.slot == SlotKind::BetweenBaseAndScripts {
                return (depth + 1 == hops.len()).then_some(atom);
            }
            list = atom.slot_mut(hop.slot)?;
        }
        list.atoms.get_mut(position.final_index())
    }

    /// The level list a position points into, following every hop strictly.
    ///
    /// Errors signal a stale or corrupted position (a contract violation
    /// per the error model), never an expected condition; the waypoint is
    /// rejected here because it stores nothing.
    pub fn list_at(&self, position: &Position) -> Result<&MathList, TreeError> {
        let mut list = self;
        for hop in position.hops() {
            let len = list.len();
            let atom = list
                .atoms
                .get(hop.index)
                .ok_or(TreeError::IndexOutOfBounds {
                    index: hop.index,
                    len,
                })?;
            list = atom.slot(hop.slot).ok_or(TreeError::MissingSlot {
                index: hop.index,
                slot: hop.slot,
            })?;
        }
        Ok(list)
    }

    /// Mutable twin of [`Self::list_at`].
    pub fn list_at_mut(&mut self, position: &Position) -> Result<&mut MathList, TreeError> {
        let mut list = self;
        for hop in position.hops() {
            let len = list.len();
            let atom = list
                .atoms
                .get_mut(hop.index)
                .ok_or(TreeError::IndexOutOfBounds {
                    index: hop.index,
                    len,
                })?;
            list = atom.slot_mut(hop.slot).ok_or(TreeError::MissingSlot {
                index: hop.index,
                slot: hop.slot,
            })?;
        }
        Ok(list)
    }
}

impl From<Vec<Atom>> for MathList {
    fn from(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }
}

impl IntoIterator for MathList {
    type Item = Atom;
    type IntoIter = std::vec::IntoIter<Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'a> IntoIterator for &'a MathList {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
