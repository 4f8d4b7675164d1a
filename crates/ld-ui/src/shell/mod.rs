use egui::Ui;
use ld_core::LayoutDirection;

/// Lay out `add_contents` as a row or a column
pub fn with_layout<R>(
    ui: &mut Ui,
    direction: LayoutDirection,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    match direction {
        LayoutDirection::Row => ui.horizontal_top(add_contents).inner,
        LayoutDirection::Column => ui.vertical(add_contents).inner,
    }
}
