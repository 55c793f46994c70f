//! Built-in symbol table.
//!
//! A compact, total mapping good enough to run the editor without a host:
//! digits become numbers, latin and greek letters become variables, the
//! usual operator/relation/bracket characters get their structural kinds,
//! and the named functions the function keys produce resolve to large
//! operators.

use crate::frontend::SymbolTable;
use nabla_mathlist::Atom;

/// Names the built-in table resolves; everything the named-function keys
/// can send.
const FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "cot", "sec", "csc", "arcsin", "arccos", "arctan", "arccot", "arcsec",
    "arccsc", "sinh", "cosh", "tanh", "coth", "sech", "csch", "arsinh", "arcosh", "artanh",
    "arcoth", "arsech", "arcsch", "log", "ln",
];

/// The default [`SymbolTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSymbols;

impl SymbolTable for BuiltinSymbols {
    fn lookup_by_character(&self, ch: char) -> Option<Atom> {
        let atom = match ch {
            '0'..='9' | '.' => Atom::number(ch.to_string()),
            'a'..='z' | 'A'..='Z' => Atom::variable(ch.to_string()),
            '\u{0391}'..='\u{03A9}' | '\u{03B1}'..='\u{03C9}' => Atom::variable(ch.to_string()),
            '+' => Atom::binary_operator("+"),
            // Hyphen-minus is normalized to the minus sign.
            '-' | '\u{2212}' => Atom::binary_operator("\u{2212}"),
            '*' | '\u{00D7}' => Atom::times(),
            '\u{00F7}' => Atom::binary_operator("\u{00F7}"),
            '=' => Atom::relation("="),
            '<' => Atom::relation("<"),
            '>' => Atom::relation(">"),
            ':' => Atom::relation(":"),
            '\u{2260}' => Atom::relation("\u{2260}"),
            '\u{2264}' => Atom::relation("\u{2264}"),
            '\u{2265}' => Atom::relation("\u{2265}"),
            '(' | '[' | '{' => Atom::open(ch.to_string()),
            ')' | ']' | '}' => Atom::close(ch.to_string(), false),
            ',' | ';' => Atom::punctuation(ch.to_string()),
            '!' | '%' | '|' | '\u{00B0}' | '\u{221E}' | '\u{2220}' => {
                Atom::ordinary(ch.to_string())
            }
            _ => return None,
        };
        Some(atom)
    }

    fn lookup_by_symbol_name(&self, name: &str) -> Option<Atom> {
        FUNCTION_NAMES
            .contains(&name)
            .then(|| Atom::large_operator(name))
    }
}
