// End-to-end scenarios for the notes editor: collection bookkeeping, edit
// reconciliation and formatting commands driven through the public API.

use notes_wasm::notes::{FormattingState, NotesEditor, UpdateOutcome};
use notes_wasm::text::{FontSize, Selection, SpanStyle, StyleRange, TextValue};

/// Feed the editor a value with the current styles and a new selection, the
/// way a text input reports a caret move
fn select(editor: &mut NotesEditor, anchor: usize, head: usize) {
    let current = editor.current_note().value.clone();
    let value = TextValue::from_parts(
        current.text(),
        current.styles().iter().copied(),
        Selection::new(anchor, head),
    );
    editor.update_text(value);
}

/// Type into the editor the way an input that drops annotations does
fn type_plain(editor: &mut NotesEditor, text: &str, caret: usize) -> UpdateOutcome {
    editor.update_text(TextValue::from_parts(text, Vec::new(), Selection::collapsed(caret)))
}

fn assert_invariants(editor: &NotesEditor) {
    let notes = editor.notes();
    assert!(!notes.is_empty(), "collection must never be empty");
    assert!(notes.display_index() < notes.len());
    for note in notes.notes() {
        assert!(
            note.value.is_consistent(),
            "styles {:?} do not fit text {:?}",
            note.value.styles(),
            note.value.text()
        );
    }
}

#[test]
fn test_fresh_collection_add_and_switch() {
    let mut editor = NotesEditor::new();
    assert_eq!(editor.notes().len(), 1);
    let first_id = editor.current_note().id;

    editor.add_note();
    assert_eq!(editor.notes().len(), 2);
    assert_eq!(editor.notes().selected(), 1);
    assert_ne!(editor.current_note().id, first_id);

    assert!(editor.select_tab(0));
    assert_eq!(editor.notes().selected(), 0);
    assert_eq!(editor.current_note().id, first_id);
    assert!(editor.current_note().value.is_empty());
    assert_invariants(&editor);
}

#[test]
fn test_notes_are_edited_independently() {
    let mut editor = NotesEditor::new();
    type_plain(&mut editor, "first", 5);
    editor.add_note();
    type_plain(&mut editor, "second", 6);

    editor.select_tab(0);
    assert_eq!(editor.current_note().value.text(), "first");
    editor.select_tab(1);
    assert_eq!(editor.current_note().value.text(), "second");
}

#[test]
fn test_apply_then_toggle_bold_round_trip() {
    let mut editor = NotesEditor::new();
    type_plain(&mut editor, "hello world", 11);

    select(&mut editor, 2, 5);
    editor.apply_style(SpanStyle::bold());
    assert_eq!(editor.current_note().value.selection(), Selection::collapsed(5));

    select(&mut editor, 2, 5);
    editor.toggle_bold();

    let still_bold = editor
        .current_note()
        .value
        .styles()
        .iter()
        .any(|r| r.style.is_bold() && r.start < 5 && r.end > 2);
    assert!(!still_bold);
    assert_invariants(&editor);
}

#[test]
fn test_insert_inside_bold_range_extends_it() {
    let mut editor = NotesEditor::new();
    editor.update_text(TextValue::from_parts(
        "hello",
        [StyleRange::new(0, 5, SpanStyle::bold())],
        Selection::collapsed(2),
    ));

    let outcome = type_plain(&mut editor, "heXllo", 3);

    assert_eq!(outcome, UpdateOutcome::Reconciled);
    assert_eq!(
        editor.current_note().value.styles().ranges(),
        &[StyleRange::new(0, 6, SpanStyle::bold())]
    );
}

#[test]
fn test_deleting_styled_word_drops_its_range() {
    let mut editor = NotesEditor::new();
    editor.update_text(TextValue::from_parts(
        "hello world",
        [StyleRange::new(6, 11, SpanStyle::bold())],
        Selection::collapsed(11),
    ));

    type_plain(&mut editor, "hello", 5);

    assert_eq!(editor.current_note().value.text(), "hello");
    assert!(editor.current_note().value.styles().is_empty());
    assert_invariants(&editor);
}

#[test]
fn test_replacing_selection_keeps_surrounding_styles() {
    // "one two three" with "two" bold and everything italic; replace "two"
    // with "2" in one step.
    let mut editor = NotesEditor::new();
    editor.update_text(TextValue::from_parts(
        "one two three",
        [
            StyleRange::new(4, 7, SpanStyle::bold()),
            StyleRange::new(0, 13, SpanStyle::italic()),
        ],
        Selection::new(4, 7),
    ));

    type_plain(&mut editor, "one 2 three", 5);

    assert_eq!(
        editor.current_note().value.styles().ranges(),
        &[
            StyleRange::new(4, 5, SpanStyle::bold()),
            StyleRange::new(0, 11, SpanStyle::italic()),
        ]
    );
}

#[test]
fn test_host_offsets_with_emoji_style_the_selected_text() {
    // The host counts "😀" as two units, so "ab" is 2..4 on its side
    let mut editor = NotesEditor::new();
    editor.update_text(TextValue::from_utf16_parts("😀ab", Vec::new(), Selection::new(2, 4)));

    editor.toggle_bold();

    let value = editor.current_note().value.clone();
    assert_eq!(value.styles().ranges(), &[StyleRange::new(1, 3, SpanStyle::bold())]);
    assert_eq!(value.selection(), Selection::collapsed(3));

    let host = editor.snapshot().with_utf16_offsets().current;
    assert_eq!(host.styles().ranges(), &[StyleRange::new(2, 4, SpanStyle::bold())]);
    assert_eq!(host.selection(), Selection::collapsed(4));

    // Typing after the emoji keeps the bold run on "ab"
    editor.update_text(TextValue::from_utf16_parts("😀Xab", Vec::new(), Selection::collapsed(3)));
    assert_eq!(
        editor.current_note().value.styles().ranges(),
        &[StyleRange::new(2, 4, SpanStyle::bold())]
    );
    assert_invariants(&editor);
}

#[test]
fn test_collapsed_toggle_is_pending_style() {
    let mut editor = NotesEditor::new();
    type_plain(&mut editor, "abc", 3);
    assert_eq!(editor.formatting(), FormattingState::default());

    editor.toggle_bold();

    assert!(editor.is_bold_active());
    assert!(editor.current_note().value.styles().is_empty());

    // Moving the caret keeps the pending flag
    select(&mut editor, 1, 1);
    assert!(editor.is_bold_active());
}

#[test]
fn test_flags_follow_any_overlap() {
    let mut editor = NotesEditor::new();
    editor.update_text(TextValue::from_parts(
        "abcdefgh",
        [
            StyleRange::new(0, 2, SpanStyle::bold()),
            StyleRange::new(6, 8, SpanStyle::italic()),
        ],
        Selection::collapsed(0),
    ));

    select(&mut editor, 1, 7);
    assert_eq!(editor.formatting(), FormattingState { bold: true, italic: true });

    select(&mut editor, 2, 6);
    assert_eq!(editor.formatting(), FormattingState { bold: false, italic: false });
}

#[test]
fn test_font_sizes_do_not_toggle() {
    let mut editor = NotesEditor::new();
    type_plain(&mut editor, "sized", 5);

    for sp in FontSize::PRESETS {
        select(&mut editor, 0, 5);
        editor.apply_font_size(FontSize::new(sp).unwrap());
    }

    let sizes: Vec<u16> = editor
        .current_note()
        .value
        .styles()
        .iter()
        .filter_map(|r| r.style.font_size.map(|s| s.sp()))
        .collect();
    assert_eq!(sizes, vec![12, 16, 20, 24]);
}

#[test]
fn test_invariants_hold_through_mixed_session() {
    let mut editor = NotesEditor::new();
    type_plain(&mut editor, "The quick brown fox", 19);
    select(&mut editor, 4, 9);
    editor.toggle_bold();
    select(&mut editor, 0, 19);
    editor.toggle_italic();
    assert_invariants(&editor);

    // Backspace over the end, then type a bit
    type_plain(&mut editor, "The quick", 9);
    assert_invariants(&editor);
    type_plain(&mut editor, "The quick!", 10);
    assert_invariants(&editor);

    // Wipe everything
    type_plain(&mut editor, "", 0);
    assert_invariants(&editor);
    assert!(editor.current_note().value.styles().is_empty());

    editor.add_note();
    editor.select_tab(42);
    assert_invariants(&editor);
    assert_eq!(editor.notes().selected(), 1);
}
