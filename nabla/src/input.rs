//! Input events the session can process.
//!
//! Each variant is one keystroke category; inputs are pure data with no
//! behavior. Printable keys arrive as [`Input::Character`]; named-function
//! keys (`sin`, `log`, …) arrive as [`Input::Symbol`] and resolve through
//! the symbol table's name lookup.

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor left across the structure.
    Left,
    /// Move the cursor right across the structure.
    Right,
    /// Vertical movement is not wired up yet.
    // TODO: route Up/Down between numerator/denominator and base/scripts
    // once the layout engine can report vertical neighbors.
    Up,
    Down,
    /// Delete the atom before the cursor.
    Backspace,
    /// Empty the whole formula.
    Clear,
    /// End the session, keeping the input.
    Return,
    /// End the session, discarding the input.
    Dismiss,
    /// A printable character; resolved through the symbol table with an
    /// ordinary-atom fallback.
    Character(char),
    /// A named symbol such as `"sin"` or `"ln"`; must exist in the table.
    Symbol(&'static str),
    /// Start (or enter) a superscript on the preceding atom.
    Superscript,
    /// Start (or enter) a subscript on the preceding atom.
    Subscript,
    /// Convert the preceding expression into a fraction numerator.
    Slash,
    /// Insert a fraction with placeholder numerator and denominator.
    Fraction,
    SquareRoot,
    CubeRoot,
    /// Radical with an editable degree; the cursor enters the degree.
    NthRoot,
    /// `(` and `)` inserted together, cursor between them.
    RoundBracketPair,
    /// Two `|` atoms inserted together, cursor between them.
    AbsoluteValue,
    /// `e` with the cursor in a fresh superscript.
    BaseEPower,
    /// `log` with the cursor in a fresh subscript.
    LogarithmWithBase,
}
