//! App shell: loading gate, event intake, overlays, settings, and the frame
//! loop that feeds the view-state models.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Align2, Color32, Id, Order, Pos2, Rect};
use serde::{Deserialize, Serialize};
use shared::catalog::{CATALOG, STUDIO_NAME};
use shared::domain::{CategoryFilter, ItemId, SectionAnchor};
use view_core::{
    ContactForm, LoadingPhase, LoadingSequencer, PointerTracker, PortfolioFilter, ScrollLock,
    ScrollLockGuard, SectionReveal,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{StatusToast, ToastSeverity, UiEvent};
use crate::ui::theme;

pub(crate) const SETTINGS_STORAGE_KEY: &str = "portfolio_desktop_settings";
/// Scroll offset past which the nav bar gets an opaque backdrop.
pub(crate) const NAV_SCROLLED_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub initial_filter: Option<CategoryFilter>,
    pub skip_intro: bool,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopSettings {
    pub text_scale: f32,
    pub reduced_motion: bool,
}

impl DesktopSettings {
    fn defaults() -> Self {
        Self {
            text_scale: 1.0,
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    text_scale: f32,
    reduced_motion: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        let settings = DesktopSettings::defaults();
        Self {
            text_scale: settings.text_scale,
            reduced_motion: settings.reduced_motion,
        }
    }
}

impl PersistedSettings {
    pub fn into_runtime(self) -> DesktopSettings {
        DesktopSettings {
            text_scale: self.text_scale.clamp(0.8, 1.4),
            reduced_motion: self.reduced_motion,
        }
    }

    pub fn from_runtime(settings: DesktopSettings) -> Self {
        Self {
            text_scale: settings.text_scale.clamp(0.8, 1.4),
            reduced_motion: settings.reduced_motion,
        }
    }
}

pub struct PortfolioApp {
    pub(crate) cmd_tx: Sender<BackendCommand>,
    pub(crate) ui_rx: Receiver<UiEvent>,

    // Intro gating. The guard holds the scroll lock for the whole Loading and
    // Transitioning window; dropping it (Ready, or app teardown) unlocks.
    pub(crate) sequencer: Option<LoadingSequencer>,
    pub(crate) scroll_lock: Arc<ScrollLock>,
    pub(crate) intro_guard: Option<ScrollLockGuard>,

    pub(crate) filter: PortfolioFilter,
    pub(crate) form: ContactForm,
    pub(crate) pointer: PointerTracker,
    pub(crate) hover_this_frame: bool,
    pub(crate) cursor_ring: Option<Pos2>,

    pub(crate) reveals: HashMap<SectionAnchor, SectionReveal>,
    pub(crate) scroll_target: Option<SectionAnchor>,
    pub(crate) scroll_offset: f32,
    pub(crate) viewport_height: f32,

    pub(crate) lightbox: Option<ItemId>,
    pub(crate) toast: Option<StatusToast>,

    pub(crate) settings_open: bool,
    pub(crate) settings: DesktopSettings,
    pub(crate) applied_text_scale: Option<f32>,

    pub(crate) tick: u64,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupOptions,
        persisted: Option<PersistedSettings>,
    ) -> Self {
        let mut settings = persisted.unwrap_or_default().into_runtime();
        settings.reduced_motion |= startup.reduced_motion;

        let mut filter = PortfolioFilter::new(&CATALOG);
        if let Some(initial) = startup.initial_filter {
            filter.set_category(initial);
        }

        let scroll_lock = ScrollLock::new();
        let run_intro = !startup.skip_intro && !settings.reduced_motion;
        let sequencer = run_intro.then(|| LoadingSequencer::start(Instant::now()));
        let intro_guard = sequencer.is_some().then(|| scroll_lock.acquire());

        Self {
            cmd_tx,
            ui_rx,
            sequencer,
            scroll_lock,
            intro_guard,
            filter,
            form: ContactForm::new(),
            pointer: PointerTracker::new(),
            hover_this_frame: false,
            cursor_ring: None,
            reveals: HashMap::new(),
            scroll_target: None,
            scroll_offset: 0.0,
            viewport_height: 800.0,
            lightbox: None,
            toast: None,
            settings_open: false,
            settings,
            applied_text_scale: None,
            tick: 0,
        }
    }

    pub(crate) fn reduced_motion(&self) -> bool {
        self.settings.reduced_motion
    }

    /// Animation duration honoring the reduced-motion preference.
    pub(crate) fn anim_time(&self, seconds: f32) -> f32 {
        if self.reduced_motion() {
            0.0
        } else {
            seconds
        }
    }

    pub(crate) fn mark_hover(&mut self, response: &egui::Response) {
        if response.hovered() {
            self.hover_this_frame = true;
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ContactDelivered => {
                    self.form.submit_succeeded();
                    self.toast = Some(StatusToast::success(
                        "Message sent successfully! I'll get back to you soon.",
                    ));
                }
                UiEvent::ContactDeliveryFailed { reason } => {
                    self.form.submit_failed();
                    self.toast = Some(StatusToast::error(format!(
                        "Couldn't send your message: {reason}. Please try again."
                    )));
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_text_scale == Some(self.settings.text_scale) {
            return;
        }
        theme::apply(ctx, self.settings.text_scale);
        self.applied_text_scale = Some(self.settings.text_scale);
    }

    fn current_phase(&self, now: Instant) -> LoadingPhase {
        match &self.sequencer {
            Some(sequencer) => sequencer.poll(now),
            None => LoadingPhase::Ready,
        }
    }

    fn show_loading_screen(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(sequencer) = self.sequencer else {
            return;
        };
        let progress = sequencer.progress(now);
        let fading = sequencer.poll(now) == LoadingPhase::Transitioning;
        let strength = if fading { 0.5 } else { 1.0 };
        let time = ctx.input(|i| i.time);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let center = rect.center();
                let painter = ui.painter();

                // Aperture blade fan; blades fade in staggered over the intro.
                let blade_radius = 54.0;
                for blade in 0..8u32 {
                    let appear = ((progress * 1.6) - blade as f32 * 0.08).clamp(0.0, 1.0);
                    if appear <= 0.0 {
                        continue;
                    }
                    let start = (blade as f32) * std::f32::consts::TAU / 8.0;
                    let end = start + std::f32::consts::TAU / 8.0;
                    let mid = (start + end) / 2.0;
                    let r = blade_radius * (0.5 + 0.5 * appear);
                    let points = vec![
                        center,
                        center + egui::vec2(start.cos(), start.sin()) * r,
                        center + egui::vec2(mid.cos(), mid.sin()) * r,
                        center + egui::vec2(end.cos(), end.sin()) * r,
                    ];
                    let alpha = (appear * 235.0 * strength) as u8;
                    painter.add(egui::Shape::convex_polygon(
                        points,
                        theme::with_alpha(theme::GOLD, alpha),
                        egui::Stroke::NONE,
                    ));
                }
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "📷",
                    egui::FontId::proportional(30.0),
                    theme::with_alpha(theme::BACKGROUND, (255.0 * strength) as u8),
                );

                painter.text(
                    center + egui::vec2(0.0, 96.0),
                    Align2::CENTER_CENTER,
                    STUDIO_NAME,
                    egui::FontId::proportional(26.0),
                    theme::with_alpha(theme::GOLD, (255.0 * strength) as u8),
                );

                // Three bouncing dots.
                for dot in 0..3 {
                    let phase = time as f32 / 0.8 + dot as f32 * 0.55;
                    let bounce = (phase * std::f32::consts::TAU).sin() * 3.0;
                    let alpha = (0.3 + 0.7 * (phase * std::f32::consts::TAU).sin().abs())
                        * 255.0
                        * strength;
                    painter.circle_filled(
                        center + egui::vec2((dot as f32 - 1.0) * 14.0, 130.0 + bounce),
                        3.0,
                        theme::with_alpha(theme::GOLD, alpha as u8),
                    );
                }

                // Progress bar.
                let bar = Rect::from_center_size(
                    center + egui::vec2(0.0, 170.0),
                    egui::vec2(192.0, 3.0),
                );
                painter.rect_filled(bar, 2.0, theme::MUTED);
                let fill = Rect::from_min_size(
                    bar.min,
                    egui::vec2(bar.width() * progress, bar.height()),
                );
                painter.rect_filled(fill, 2.0, theme::GOLD);
            });
    }

    fn show_toast(&mut self, ctx: &egui::Context, now: Instant) {
        if self
            .toast
            .as_ref()
            .map(|toast| toast.expired(now))
            .unwrap_or(false)
        {
            self.toast = None;
        }
        let Some(toast) = self.toast.clone() else {
            return;
        };

        let accent = match toast.severity {
            ToastSeverity::Success => theme::GOLD,
            ToastSeverity::Error => Color32::from_rgb(200, 84, 84),
        };
        egui::Area::new(Id::new("status-toast"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme::CHARCOAL_LIGHT)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .rounding(10.0)
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .show(ui, |ui| {
                        ui.set_max_width(340.0);
                        ui.horizontal(|ui| {
                            let glyph = match toast.severity {
                                ToastSeverity::Success => "✔",
                                ToastSeverity::Error => "⚠",
                            };
                            ui.label(egui::RichText::new(glyph).color(accent).size(18.0));
                            ui.label(&toast.message);
                        });
                    });
            });
    }

    fn show_shutter_overlay(&mut self, ctx: &egui::Context) {
        let t = ctx.animate_bool_with_time(
            Id::new("shutter-overlay"),
            self.form.shutter_visible(),
            self.anim_time(0.6),
        );
        if t <= 0.01 {
            return;
        }
        let screen = ctx.screen_rect();
        let center = screen.center();
        let painter = ctx.layer_painter(egui::LayerId::new(Order::Foreground, Id::new("shutter")));
        painter.rect_filled(screen, 0.0, theme::with_alpha(theme::BACKGROUND, (t * 255.0) as u8));

        // Blades sweep in from the edges as the shutter closes.
        let max_r = screen.size().max_elem();
        for blade in 0..8u32 {
            let start = (blade as f32) * std::f32::consts::TAU / 8.0;
            let mid = start + std::f32::consts::TAU / 16.0;
            let reach = max_r * (1.0 - t * 0.85);
            let points = vec![
                center + egui::vec2(start.cos(), start.sin()) * max_r,
                center + egui::vec2(mid.cos(), mid.sin()) * max_r,
                center + egui::vec2(mid.cos(), mid.sin()) * reach,
            ];
            painter.add(egui::Shape::convex_polygon(
                points,
                theme::with_alpha(theme::CHARCOAL_LIGHT, (t * 230.0) as u8),
                egui::Stroke::NONE,
            ));
        }
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "📷",
            egui::FontId::proportional(52.0),
            theme::with_alpha(theme::GOLD, (t * 255.0) as u8),
        );
    }

    fn show_lightbox(&mut self, ctx: &egui::Context) {
        let Some(item_id) = self.lightbox else {
            return;
        };
        let Some(item) = CATALOG.iter().find(|item| item.id == item_id) else {
            self.lightbox = None;
            return;
        };

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.lightbox = None;
            return;
        }

        let screen = ctx.screen_rect();
        let mut close = false;

        egui::Area::new(Id::new("lightbox-backdrop"))
            .order(Order::Foreground)
            .fixed_pos(Pos2::ZERO)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(
                    screen,
                    0.0,
                    theme::with_alpha(theme::BACKGROUND, 242),
                );
                if response.clicked() {
                    close = true;
                }
            });

        let card_size = egui::vec2(
            (screen.width() * 0.7).clamp(320.0, 880.0),
            (screen.height() * 0.7).clamp(260.0, 660.0),
        );
        egui::Area::new(Id::new("lightbox-card"))
            .order(Order::Tooltip)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let (rect, card_response) =
                    ui.allocate_exact_size(card_size, egui::Sense::click());
                // Clicks on the card itself do not close the lightbox.
                let _ = card_response;
                let painter = ui.painter();
                painter.rect_filled(rect, 12.0, theme::CHARCOAL_LIGHT);
                painter.rect_filled(
                    rect,
                    12.0,
                    theme::with_alpha(theme::tint_color(item.tint, 255), 70),
                );
                painter.rect_stroke(rect, 12.0, egui::Stroke::new(1.0, theme::BORDER));
                painter.circle_stroke(
                    rect.center() - egui::vec2(0.0, 24.0),
                    48.0,
                    egui::Stroke::new(2.0, theme::with_alpha(theme::GOLD, 80)),
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 48.0),
                    Align2::CENTER_CENTER,
                    format!("{} · {}", item.title, item.category.label()),
                    egui::FontId::proportional(20.0),
                    theme::FOREGROUND,
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 76.0),
                    Align2::CENTER_CENTER,
                    "Image Preview",
                    egui::FontId::proportional(14.0),
                    theme::MUTED_FOREGROUND,
                );

                let close_rect = Rect::from_center_size(
                    rect.right_top() + egui::vec2(-26.0, 26.0),
                    egui::vec2(32.0, 32.0),
                );
                let close_response =
                    ui.interact(close_rect, Id::new("lightbox-close"), egui::Sense::click());
                let close_fill = if close_response.hovered() {
                    theme::GOLD
                } else {
                    theme::with_alpha(theme::BACKGROUND, 200)
                };
                ui.painter().circle_filled(close_rect.center(), 16.0, close_fill);
                ui.painter().text(
                    close_rect.center(),
                    Align2::CENTER_CENTER,
                    "✕",
                    egui::FontId::proportional(15.0),
                    if close_response.hovered() {
                        theme::ON_GOLD
                    } else {
                        theme::FOREGROUND
                    },
                );
                if close_response.clicked() {
                    close = true;
                }
                if close_response.hovered() {
                    self.hover_this_frame = true;
                }
            });

        if close {
            self.lightbox = None;
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        egui::Window::new("Settings")
            .open(&mut self.settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(
                    &mut self.settings.reduced_motion,
                    "Reduce motion (skip intro and entry animations)",
                );
                if ui.button("Reset to defaults").clicked() {
                    self.settings = DesktopSettings::defaults();
                }
            });
    }

    fn show_custom_cursor(&mut self, ctx: &egui::Context) {
        if self.reduced_motion() {
            return;
        }
        let Some(sample) = self.pointer.last() else {
            self.cursor_ring = None;
            return;
        };
        ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::None);

        let pos = Pos2::new(sample.x, sample.y);
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let ring = match self.cursor_ring {
            Some(ring) => ring + (pos - ring) * (dt * 9.0).clamp(0.0, 1.0),
            None => pos,
        };
        self.cursor_ring = Some(ring);

        let scale = ctx.animate_value_with_time(
            Id::new("cursor-scale"),
            self.pointer.cursor_scale(),
            0.15,
        );
        let painter =
            ctx.layer_painter(egui::LayerId::new(Order::Tooltip, Id::new("custom-cursor")));
        painter.circle_filled(pos, 5.0 * scale, theme::GOLD);
        painter.circle_stroke(
            ring,
            20.0 * (0.75 + 0.25 * scale),
            egui::Stroke::new(1.0, theme::with_alpha(theme::GOLD, 100)),
        );
        if self.pointer.hovering_interactive() {
            // Aperture spokes around the hovered cursor.
            for spoke in 0..6u32 {
                let angle = spoke as f32 * std::f32::consts::TAU / 6.0;
                let dir = egui::vec2(angle.cos(), angle.sin());
                painter.line_segment(
                    [pos + dir * 24.0, pos + dir * 30.0],
                    egui::Stroke::new(1.0, theme::with_alpha(theme::GOLD, 70)),
                );
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let now = Instant::now();
        let phase = self.current_phase(now);
        if phase == LoadingPhase::Ready && self.intro_guard.is_some() {
            // Dropping the guard releases the scroll lock.
            self.intro_guard = None;
            tracing::debug!("intro finished, content mounted");
        }

        match phase {
            LoadingPhase::Loading | LoadingPhase::Transitioning => {
                debug_assert!(self.scroll_lock.is_locked());
                self.show_loading_screen(ctx, now);
                ctx.request_repaint_after(std::time::Duration::from_millis(16));
                return;
            }
            LoadingPhase::Ready => {}
        }

        self.hover_this_frame = false;
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            self.pointer.sample(pos.x, pos.y);
        } else {
            self.pointer.clear();
        }

        self.show_navigation(ctx);
        self.show_page(ctx);
        self.show_lightbox(ctx);
        self.show_shutter_overlay(ctx);
        self.show_settings_window(ctx);
        self.show_toast(ctx, now);

        let hovering = self.hover_this_frame;
        self.pointer.set_hovering(hovering);
        self.show_custom_cursor(ctx);

        if self.reduced_motion() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else {
            // Floating frames and the cursor ring animate continuously.
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedSettings::from_runtime(self.settings);
        if let Ok(serialized) = serde_json::to_string(&persisted) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
