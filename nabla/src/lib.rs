//! Editable-document core for a structured math-formula editor.
//!
//! A [`Session`] owns a tree of formula atoms and a cursor into it, and
//! processes one [`Input`] at a time: navigation across arbitrary nesting,
//! structural edits (scripts, fractions, radicals, bracket pairs, the
//! slash-to-fraction heuristic) and a placeholder presentation pass. The
//! tree is never left in a state the cursor cannot resolve against.
//!
//! Rendering, layout and hit testing live behind the traits in
//! [`frontend`]; the session runs headless without them. Outbound
//! notifications are plain [`SessionEvent`] values the host drains after
//! each operation.
//!
//! ```
//! use nabla::{Input, Session};
//!
//! let mut session = Session::new();
//! session.key_presses([
//!     Input::Character('x'),
//!     Input::Superscript,
//!     Input::Character('2'),
//! ])?;
//! assert_eq!(session.markup(), "x^{2}");
//! # Ok::<(), nabla::EditorError>(())
//! ```

mod edit;
pub mod events;
pub mod frontend;
mod input;
pub mod navigation;
mod presentation;
mod session;
pub mod symbols;
pub mod testing;

pub use events::SessionEvent;
pub use frontend::{Caret, Color, LayoutEngine, LineStyle, Point, SymbolTable};
pub use input::Input;
pub use session::{EditorError, Session};

// Re-export the data model so most hosts only need one dependency.
pub use nabla_mathlist::{
    tree_to_markup, Atom, AtomKind, ListRange, MathList, Position, SlotKind, TreeError,
    PLACEHOLDER_FILLED, PLACEHOLDER_HOLLOW,
};
