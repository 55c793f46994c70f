//! Basic editing functionality tests.

use nabla::{Input, MathList, Point, Position, Session, SessionEvent};

#[test]
fn new_session_is_empty() {
    let session = Session::new();
    assert_eq!(session.markup(), "");
    assert!(!session.has_content());
    assert_eq!(session.position(), &Position::root(0));
    assert!(session.caret().is_none());
}

#[test]
fn typing_appends_atoms_in_order() {
    Session::test()
        .type_chars("2+3")
        .assert_markup("2+3")
        .assert_position(&Position::root(3))
        .assert_caret_visible(true);
}

#[test]
fn typing_in_the_middle_inserts_at_the_cursor() {
    Session::test()
        .type_chars("24")
        .press(Input::Left)
        .type_chars("3")
        .assert_markup("234")
        .assert_position(&Position::root(2));
}

#[test]
fn backspace_removes_the_atom_before_the_cursor() {
    Session::test()
        .type_chars("23")
        .press(Input::Backspace)
        .assert_markup("2")
        .assert_position(&Position::root(1));
}

#[test]
fn backspace_on_an_empty_formula_is_a_no_op() {
    Session::test()
        .press(Input::Backspace)
        .assert_markup("")
        .assert_position(&Position::root(0));
}

#[test]
fn backspace_at_the_start_of_a_nested_level_is_a_no_op() {
    // The numerator has no previous atom at its own level; backspace does
    // not eat through the fraction boundary.
    Session::test()
        .press(Input::Fraction)
        .press(Input::Backspace)
        .assert_markup("\\frac{\u{25A0}}{\u{25A1}}");
}

#[test]
fn clear_empties_the_formula_and_resets_the_cursor() {
    Session::test()
        .type_chars("2+3")
        .press(Input::Clear)
        .assert_markup("")
        .assert_position(&Position::root(0));
}

#[test]
fn bracket_pair_leaves_the_cursor_between_the_brackets() {
    Session::test()
        .press(Input::RoundBracketPair)
        .assert_position(&Position::root(1))
        .type_chars("x")
        .assert_markup("(x)");
}

#[test]
fn absolute_value_pair_behaves_like_brackets() {
    Session::test()
        .press(Input::AbsoluteValue)
        .type_chars("x")
        .assert_markup("|x|");
}

#[test]
fn edits_request_a_redraw() {
    Session::test()
        .type_chars("1")
        .assert_emitted(SessionEvent::RedrawRequested);
}

#[test]
fn return_ends_the_session_without_a_redraw() {
    let mut harness = Session::test().type_chars("1");
    harness.session().take_events();
    harness
        .press(Input::Return)
        .assert_emitted(SessionEvent::ReturnPressed)
        .assert_caret_visible(false);
}

#[test]
fn dismiss_ends_the_session_and_hides_the_caret() {
    Session::test()
        .type_chars("1")
        .press(Input::Dismiss)
        .assert_emitted(SessionEvent::DismissPressed)
        .assert_caret_visible(false);
}

#[test]
fn up_and_down_leave_the_formula_untouched() {
    Session::test()
        .type_chars("12")
        .press(Input::Up)
        .press(Input::Down)
        .assert_markup("12")
        .assert_position(&Position::root(2));
}

#[test]
fn insert_list_at_point_splices_at_the_root_level() {
    nabla_log::test();
    let mut session = Session::new();
    let pasted = MathList::from(vec![
        nabla::Atom::number("1"),
        nabla::Atom::binary_operator("+"),
        nabla::Atom::number("2"),
    ]);

    session
        .insert_list_at_point(pasted, Point::default())
        .expect("splice");

    assert_eq!(session.markup(), "1+2");
    assert_eq!(session.position(), &Position::root(3));
}

#[test]
fn move_caret_to_point_without_layout_falls_back_to_the_end() {
    let mut session = Session::new();
    for ch in "12".chars() {
        session.key_press(Input::Character(ch)).expect("type");
    }
    session.key_press(Input::Left).expect("left");

    session.move_caret_to_point(Point::new(0.0, 0.0));

    assert_eq!(session.position(), &Position::root(2));
    assert!(session.caret().is_some());
}

#[test]
fn unknown_characters_fall_back_to_ordinary_atoms() {
    Session::test().type_chars("@").assert_markup("@");
}
