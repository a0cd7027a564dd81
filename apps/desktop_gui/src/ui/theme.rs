//! Gold-on-charcoal palette and egui style plumbing. The accent is
//! gold hsl(43, 74%, 49%) on near-black.

use egui::{Color32, FontFamily, FontId, TextStyle};

pub const BACKGROUND: Color32 = Color32::from_rgb(13, 13, 15);
pub const CHARCOAL: Color32 = Color32::from_rgb(22, 22, 26);
pub const CHARCOAL_LIGHT: Color32 = Color32::from_rgb(32, 32, 38);
pub const MUTED: Color32 = Color32::from_rgb(44, 44, 52);
pub const GOLD: Color32 = Color32::from_rgb(217, 164, 32);
pub const GOLD_LIGHT: Color32 = Color32::from_rgb(235, 193, 80);
pub const FOREGROUND: Color32 = Color32::from_rgb(235, 232, 225);
pub const MUTED_FOREGROUND: Color32 = Color32::from_rgb(150, 148, 142);
pub const BORDER: Color32 = Color32::from_rgb(52, 52, 60);

/// Ink color used on top of gold buttons.
pub const ON_GOLD: Color32 = Color32::from_rgb(24, 20, 10);

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Opaque paint color for a catalog tint, used where the photograph would be.
pub fn tint_color(tint: [u8; 3], alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(tint[0], tint[1], tint[2], alpha)
}

fn scaled_text_styles(scale: f32) -> std::collections::BTreeMap<TextStyle, FontId> {
    let prop = FontFamily::Proportional;
    [
        (TextStyle::Heading, FontId::new(30.0 * scale, prop.clone())),
        (TextStyle::Body, FontId::new(15.0 * scale, prop.clone())),
        (TextStyle::Button, FontId::new(15.0 * scale, prop.clone())),
        (TextStyle::Small, FontId::new(12.0 * scale, prop.clone())),
        (
            TextStyle::Monospace,
            FontId::new(14.0 * scale, FontFamily::Monospace),
        ),
    ]
    .into()
}

pub fn apply(ctx: &egui::Context, text_scale: f32) {
    let mut style = (*ctx.style()).clone();
    let visuals = &mut style.visuals;
    *visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CHARCOAL;
    visuals.extreme_bg_color = MUTED;
    visuals.faint_bg_color = CHARCOAL_LIGHT;
    visuals.override_text_color = Some(FOREGROUND);
    visuals.selection.bg_fill = with_alpha(GOLD, 90);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = MUTED;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_fill = lighten_color(MUTED, 0.06);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, with_alpha(GOLD, 150));
    visuals.widgets.active.bg_fill = lighten_color(MUTED, 0.1);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, GOLD);

    style.text_styles = scaled_text_styles(text_scale);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 7.0);
    ctx.set_style(style);
}

/// Frosted-panel frame used by cards across the page.
pub fn glass_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(with_alpha(CHARCOAL_LIGHT, 220))
        .stroke(egui::Stroke::new(1.0, BORDER))
        .rounding(14.0)
        .inner_margin(egui::Margin::symmetric(18.0, 16.0))
}
