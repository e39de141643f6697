//! Selection normalisation.

use lode_ir::Span;

/// Strip whitespace from both ends of `selection` against `text`.
///
/// A selection made only of whitespace collapses to a caret at its end.
/// A caret is returned unchanged. A selection that is out of bounds or
/// splits a character is returned unchanged; resolving it is the
/// caller's concern.
pub fn trim_selection(text: &str, selection: Span) -> Span {
    if selection.is_empty() {
        return selection;
    }
    let Some(selected) = text.get(selection.to_range()) else {
        return selection;
    };

    let leading = selected.len() - selected.trim_start().len();
    if leading == selected.len() {
        return Span::point(selection.end);
    }
    let trailing = selected.len() - selected.trim_end().len();

    // Both counts are bounded by the selection length, which fits in u32.
    Span::new(
        selection.start + leading as u32,
        selection.end - trailing as u32,
    )
}
