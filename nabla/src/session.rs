//! The editing session: one tree, one cursor, one keystroke at a time.

use crate::{
    events::SessionEvent,
    frontend::{Caret, Color, LayoutEngine, LineStyle, Point, SymbolTable},
    input::Input,
    navigation, presentation,
    symbols::BuiltinSymbols,
};
use nabla_mathlist::{tree_to_markup, Atom, MathList, Position, TreeError, PLACEHOLDER_FILLED};
use thiserror::Error;
use tracing::trace;

/// Faults a session operation can surface.
///
/// Tree faults mean a position and the tree desynchronized — an
/// implementation defect or a stale caller-held position, never expected
/// control flow. An unknown symbol name means the symbol table is
/// incomplete, which is a configuration error; unknown *characters* are
/// not errors (they fall back to a literal ordinary atom).
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("no symbol is registered under the name `{name}`")]
    UnknownSymbol { name: String },
}

/// An editing session over a single formula.
///
/// Strictly single-threaded and synchronous: every operation runs to
/// completion, and the session owns the whole tree exclusively. Outbound
/// notifications are queued as [`SessionEvent`]s and drained by the host
/// via [`take_events`](Self::take_events).
pub struct Session {
    pub(crate) list: MathList,
    pub(crate) insertion: Position,
    pub(crate) caret: Option<Caret>,
    pub(crate) font_size: f32,
    pub(crate) line_style: LineStyle,
    pub(crate) symbols: Box<dyn SymbolTable>,
    pub(crate) layout: Option<Box<dyn LayoutEngine>>,
    pub(crate) events: Vec<SessionEvent>,
}

impl Session {
    /// A headless session with the built-in symbol table. Hosts that
    /// render attach a layout engine via
    /// [`with_collaborators`](Self::with_collaborators) or
    /// [`set_layout_engine`](Self::set_layout_engine).
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(BuiltinSymbols), None)
    }

    pub fn with_collaborators(
        symbols: Box<dyn SymbolTable>,
        layout: Option<Box<dyn LayoutEngine>>,
    ) -> Self {
        Self {
            list: MathList::new(),
            insertion: Position::root(0),
            caret: None,
            font_size: 20.0,
            line_style: LineStyle::default(),
            symbols,
            layout,
            events: Vec::new(),
        }
    }

    pub fn set_layout_engine(&mut self, layout: Box<dyn LayoutEngine>) {
        self.layout = Some(layout);
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_line_style(&mut self, line_style: LineStyle) {
        self.line_style = line_style;
    }

    /// Feed one input event through the session.
    pub fn key_press(&mut self, input: Input) -> Result<(), EditorError> {
        trace!(?input, position = %self.insertion, "key press");
        match input {
            Input::Left => {
                self.insertion = navigation::move_left(&self.list, &self.insertion)?;
            }
            Input::Right => {
                self.insertion = navigation::move_right(&self.list, &self.insertion)?;
            }
            // TODO: route Up/Down once the layout engine reports vertical
            // neighbors.
            Input::Up | Input::Down => {}
            Input::Backspace => self.delete_backwards()?,
            Input::Clear => {
                self.list.clear();
                self.insertion = Position::root(0);
            }
            Input::Return => {
                self.caret = None;
                self.events.push(SessionEvent::ReturnPressed);
                return Ok(());
            }
            Input::Dismiss => {
                self.caret = None;
                self.events.push(SessionEvent::DismissPressed);
                return Ok(());
            }
            Input::Character(ch) => self.insert_character(ch)?,
            Input::Symbol(name) => self.insert_symbol_name(name)?,
            Input::Superscript => self.create_script(true)?,
            Input::Subscript => self.create_script(false)?,
            Input::Slash => self.slash_to_fraction()?,
            Input::Fraction => self.insert_atom(Atom::placeholder_fraction())?,
            Input::SquareRoot => self.create_radical(false, false)?,
            Input::CubeRoot => self.create_radical(false, true)?,
            Input::NthRoot => self.create_radical(true, false)?,
            Input::RoundBracketPair => {
                self.insert_pair(Atom::open("("), Atom::close(")", true))?
            }
            Input::AbsoluteValue => {
                self.insert_pair(Atom::ordinary("|"), Atom::ordinary("|"))?
            }
            Input::BaseEPower => {
                self.insert_character('e')?;
                self.create_script(true)?;
            }
            Input::LogarithmWithBase => {
                self.insert_symbol_name("log")?;
                self.create_script(false)?;
            }
        }
        self.refresh();
        Ok(())
    }

    /// [`key_press`](Self::key_press) over a sequence.
    pub fn key_presses(
        &mut self,
        inputs: impl IntoIterator<Item = Input>,
    ) -> Result<(), EditorError> {
        for input in inputs {
            self.key_press(input)?;
        }
        Ok(())
    }

    /// Move the caret to the position closest to `point`. Without a layout
    /// engine the caret goes to the end of the formula.
    pub fn move_caret_to_point(&mut self, point: Point) {
        self.insertion = self
            .layout
            .as_ref()
            .and_then(|layout| layout.position_for_point(point))
            .unwrap_or_else(|| Position::root(self.list.len()));
        self.caret = Some(Caret {
            font_size: self.font_size,
        });
        self.refresh();
    }

    /// Splice a whole list at the top-level index closest to `point`,
    /// leaving the cursor after the spliced content. Nesting of the hit
    /// position is intentionally ignored — insertion always happens at the
    /// root level.
    pub fn insert_list_at_point(
        &mut self,
        list: MathList,
        point: Point,
    ) -> Result<(), EditorError> {
        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.position_for_point(point))
            .unwrap_or_else(|| Position::root(0));
        let mut position = Position::root(target.top_index());
        for atom in list {
            self.list.insert_and_advance(&mut position, atom, None)?;
        }
        self.insertion = position;
        self.refresh();
        Ok(())
    }

    /// Empty the formula and reset the cursor.
    pub fn clear(&mut self) {
        self.list.clear();
        self.insertion = Position::root(0);
        self.refresh();
    }

    pub fn highlight_at(&mut self, position: &Position, color: Color) {
        if let Some(layout) = &mut self.layout {
            layout.highlight(position, color);
        }
        self.events.push(SessionEvent::RedrawRequested);
    }

    pub fn clear_highlights(&mut self) {
        if let Some(layout) = &mut self.layout {
            layout.clear_highlights();
            layout.layout(&self.list, self.line_style);
        }
        self.events.push(SessionEvent::RedrawRequested);
    }

    pub fn point_for_position(&self, position: &Position) -> Option<Point> {
        self.layout.as_ref()?.point_for_position(position)
    }

    /// The formula rendered as markup.
    pub fn markup(&self) -> String {
        tree_to_markup(&self.list)
    }

    pub fn list(&self) -> &MathList {
        &self.list
    }

    pub fn position(&self) -> &Position {
        &self.insertion
    }

    pub fn caret(&self) -> Option<Caret> {
        self.caret
    }

    pub fn has_content(&self) -> bool {
        !self.list.is_empty()
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Presentation pass: placeholder glyphs, bracket flags, caret, then a
    /// relayout and redraw request. Runs after every mutation.
    pub(crate) fn refresh(&mut self) {
        presentation::prepare(&mut self.list);
        let mut on_placeholder = false;
        if let Some(atom) = self.list.atom_at_mut(&self.insertion) {
            if atom.is_placeholder() {
                atom.nucleus = PLACEHOLDER_FILLED.into();
                on_placeholder = true;
            }
        }
        self.caret = (!on_placeholder).then(|| Caret {
            font_size: self.font_size,
        });
        if let Some(layout) = &mut self.layout {
            layout.layout(&self.list, self.line_style);
        }
        self.events.push(SessionEvent::RedrawRequested);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
