use egui::{TextEdit, Ui};

pub const SEARCH_PLACEHOLDER: &str = "Search by name";

/// Single-line search input. Returns the new term when it was edited this frame.
pub fn search_box(ui: &mut Ui, current: &str) -> Option<String> {
    let mut term = current.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut term)
            .hint_text(SEARCH_PLACEHOLDER)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(term)
}
