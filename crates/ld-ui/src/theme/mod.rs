use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Paper".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the application theme. The light variant keeps the white surface
/// and black polyline from clashing with the surrounding panels.
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if !theme.dark_mode {
        let panel_bg = Color32::from_rgb(242, 242, 240);
        let widget_bg = Color32::from_rgb(230, 230, 228);
        let hover_color = Color32::from_rgb(218, 218, 215);
        let active_color = Color32::from_rgb(205, 205, 200);
        let text_color = Color32::from_rgb(30, 30, 30);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.active.bg_fill = active_color;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.window_shadow.extrusion = 8.0;

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.indent = 20.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(60, 110, 220)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(200, 50, 50)
}
