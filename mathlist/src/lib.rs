//! Data model for a structured math-formula editor.
//!
//! The tree is built from two types: [`MathList`], an ordered sequence of
//! atoms, and [`Atom`], a node that may own nested lists (scripts on any
//! atom; numerator/denominator on fractions; radicand/degree on radicals).
//! Ownership is strictly tree-shaped — a list owns its atoms, an atom owns
//! its child lists, nothing is shared — so no `Rc` or weak references
//! appear anywhere.
//!
//! [`Position`] is the path type naming a cursor location between atoms at
//! any level; [`ListRange`] names a span at one level. The editing methods
//! on [`MathList`] (insert, remove, remove-range) are the structural
//! primitives the `nabla` session crate drives one keystroke at a time.

mod atom;
mod editing;
mod list;
mod markup;
mod position;
mod range;

pub use atom::{Atom, AtomKind, PLACEHOLDER_FILLED, PLACEHOLDER_HOLLOW};
pub use editing::TreeError;
pub use list::MathList;
pub use markup::tree_to_markup;
pub use position::{Hop, Position, SlotKind};
pub use range::ListRange;
