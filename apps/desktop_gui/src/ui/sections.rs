//! Page sections: nav bar, hero, portfolio grid, about, services, contact
//! form, and footer. Each section observes its own reveal latch and eases in
//! the first time it scrolls into view.

use eframe::egui;
use egui::{Align, Align2, Id, Pos2, Rect, RichText, Sense, Stroke, TextEdit, Vec2};
use shared::catalog::{
    CATALOG, CONTACT_DETAILS, SERVICES, SERVICE_CHOICES, SKILLS, SOCIAL_LINKS, STUDIO_NAME,
    STUDIO_TAGLINE,
};
use shared::domain::{Category, CategoryFilter, PortfolioItem, SectionAnchor};
use view_core::ContactField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::StatusToast;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::app::{PortfolioApp, NAV_SCROLLED_THRESHOLD};
use crate::ui::theme;

const SECTION_ENTRY_OFFSET: f32 = 48.0;
const SECTION_EASE_SECONDS: f32 = 0.7;

impl PortfolioApp {
    pub(crate) fn show_navigation(&mut self, ctx: &egui::Context) {
        let scrolled = self.scroll_offset > NAV_SCROLLED_THRESHOLD;
        let backdrop = ctx.animate_bool_with_time(
            Id::new("nav-backdrop"),
            scrolled,
            self.anim_time(0.25),
        );
        let fill = theme::with_alpha(theme::BACKGROUND, (backdrop * 235.0) as u8);

        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::none()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let logo = ui.add(
                        egui::Button::new(
                            RichText::new(format!("📷 {STUDIO_NAME}"))
                                .color(theme::GOLD)
                                .size(17.0)
                                .strong(),
                        )
                        .frame(false),
                    );
                    self.mark_hover(&logo);
                    if logo.clicked() {
                        self.scroll_target = Some(SectionAnchor::Home);
                    }

                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        let gear = ui.add(
                            egui::Button::new(RichText::new("⚙").size(16.0)).frame(false),
                        );
                        self.mark_hover(&gear);
                        if gear.clicked() {
                            self.settings_open = !self.settings_open;
                        }

                        let book = ui.add(
                            egui::Button::new(
                                RichText::new("Book Now").color(theme::ON_GOLD).strong(),
                            )
                            .fill(theme::GOLD)
                            .rounding(999.0),
                        );
                        self.mark_hover(&book);
                        if book.clicked() {
                            self.scroll_target = Some(SectionAnchor::Contact);
                        }

                        for anchor in SectionAnchor::NAV_ORDER.iter().rev() {
                            let link = ui.add(
                                egui::Button::new(
                                    RichText::new(anchor.label()).color(theme::FOREGROUND),
                                )
                                .frame(false),
                            );
                            self.mark_hover(&link);
                            if link.clicked() {
                                self.scroll_target = Some(*anchor);
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.viewport_height = ui.clip_rect().height();
                        ui.spacing_mut().item_spacing.y = 8.0;
                        self.show_hero(ui);
                        self.show_portfolio(ui);
                        self.show_about(ui);
                        self.show_services(ui);
                        self.show_contact(ui);
                        self.show_footer(ui);
                    });
                self.scroll_offset = output.state.offset.y;
            });
    }

    /// Feeds the section's reveal latch and returns the eased (opacity,
    /// downward offset) to apply to its content.
    fn section_entry(&mut self, ui: &mut egui::Ui, anchor: SectionAnchor) -> (f32, f32) {
        let top = ui.cursor().top();
        let bottom = ui.clip_rect().bottom();
        let reduced = self.reduced_motion();
        let reveal = self.reveals.entry(anchor).or_default();
        if reduced {
            reveal.force_reveal();
        }
        reveal.observe(top, bottom);
        let pose = reveal.pose(SECTION_ENTRY_OFFSET);

        let ease = self.anim_time(SECTION_EASE_SECONDS);
        let id = Id::new("section-entry").with(anchor.label());
        let ctx = ui.ctx().clone();
        let opacity = ctx.animate_value_with_time(id.with("opacity"), pose.opacity, ease);
        let offset = ctx.animate_value_with_time(id.with("offset"), pose.offset, ease);
        (opacity, offset)
    }

    fn finish_section(&mut self, anchor: SectionAnchor, response: &egui::Response) {
        if self.scroll_target == Some(anchor) {
            response.scroll_to_me(Some(Align::Min));
            self.scroll_target = None;
        }
    }

    fn section_header(ui: &mut egui::Ui, kicker: &str, title: &str, blurb: &str) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(kicker)
                    .color(theme::GOLD)
                    .size(12.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(title)
                    .color(theme::FOREGROUND)
                    .size(34.0)
                    .strong(),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(blurb).color(theme::MUTED_FOREGROUND));
        });
    }

    // --- Hero ---------------------------------------------------------------

    fn show_hero(&mut self, ui: &mut egui::Ui) {
        let mounted = ui.ctx().animate_bool_with_time(
            Id::new("hero-mounted"),
            true,
            self.anim_time(0.9),
        );
        // Fades and slides away as the visitor scrolls past.
        let scroll_fade =
            1.0 - (self.scroll_offset / (self.viewport_height * 0.9).max(1.0)).clamp(0.0, 1.0);
        let opacity = mounted * scroll_fade;

        let height = self.viewport_height.max(560.0);
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), height),
            Sense::hover(),
        );
        let response = ui.interact(rect, Id::new("hero-section"), Sense::hover());
        self.finish_section(SectionAnchor::Home, &response);
        if opacity <= 0.01 {
            return;
        }

        let painter = ui.painter();
        let center = rect.center();
        let time = ui.ctx().input(|i| i.time) as f32;

        // Ambient gold glow behind the headline.
        painter.circle_filled(
            center - Vec2::new(0.0, height * 0.08),
            height * 0.42,
            theme::with_alpha(theme::GOLD, (14.0 * opacity) as u8),
        );

        self.paint_floating_frames(ui, rect, time, opacity);

        let alpha = (255.0 * opacity) as u8;
        painter.text(
            center - Vec2::new(0.0, 128.0),
            Align2::CENTER_CENTER,
            "P R O F E S S I O N A L   P H O T O G R A P H E R",
            egui::FontId::proportional(12.0),
            theme::with_alpha(theme::GOLD, alpha),
        );
        painter.text(
            center - Vec2::new(0.0, 72.0),
            Align2::CENTER_CENTER,
            "Zakir",
            egui::FontId::proportional(68.0),
            theme::with_alpha(theme::GOLD, alpha),
        );
        painter.text(
            center - Vec2::new(0.0, 8.0),
            Align2::CENTER_CENTER,
            "Khan",
            egui::FontId::proportional(68.0),
            theme::with_alpha(theme::FOREGROUND, alpha),
        );
        painter.text(
            center + Vec2::new(0.0, 46.0),
            Align2::CENTER_CENTER,
            STUDIO_TAGLINE,
            egui::FontId::proportional(17.0),
            theme::with_alpha(theme::MUTED_FOREGROUND, alpha),
        );

        // CTA pair.
        let button_size = Vec2::new(164.0, 44.0);
        let view_rect = Rect::from_center_size(
            center + Vec2::new(-92.0, 108.0),
            button_size,
        );
        let touch_rect = Rect::from_center_size(
            center + Vec2::new(92.0, 108.0),
            button_size,
        );

        let view = ui.interact(view_rect, Id::new("hero-view-portfolio"), Sense::click());
        let view_fill = if view.hovered() {
            theme::GOLD_LIGHT
        } else {
            theme::GOLD
        };
        ui.painter()
            .rect_filled(view_rect, 999.0, theme::with_alpha(view_fill, alpha));
        ui.painter().text(
            view_rect.center(),
            Align2::CENTER_CENTER,
            "View Portfolio",
            egui::FontId::proportional(15.0),
            theme::with_alpha(theme::ON_GOLD, alpha),
        );
        self.mark_hover(&view);
        if view.clicked() {
            self.scroll_target = Some(SectionAnchor::Portfolio);
        }

        let touch = ui.interact(touch_rect, Id::new("hero-get-in-touch"), Sense::click());
        let touch_stroke = if touch.hovered() {
            theme::GOLD
        } else {
            theme::BORDER
        };
        ui.painter().rect_stroke(
            touch_rect,
            999.0,
            Stroke::new(1.0, theme::with_alpha(touch_stroke, alpha)),
        );
        ui.painter().text(
            touch_rect.center(),
            Align2::CENTER_CENTER,
            "Get in Touch",
            egui::FontId::proportional(15.0),
            theme::with_alpha(theme::FOREGROUND, alpha),
        );
        self.mark_hover(&touch);
        if touch.clicked() {
            self.scroll_target = Some(SectionAnchor::Contact);
        }

        // Scroll hint chevron.
        let bob = if self.reduced_motion() {
            0.0
        } else {
            (time * 2.0).sin() * 5.0
        };
        ui.painter().text(
            Pos2::new(center.x, rect.bottom() - 36.0 + bob),
            Align2::CENTER_CENTER,
            "⏷",
            egui::FontId::proportional(22.0),
            theme::with_alpha(theme::GOLD, (alpha as f32 * 0.8) as u8),
        );
    }

    /// Decorative picture frames drifting behind the hero headline. They bob
    /// on a timer and shift with the pointer for a shallow parallax.
    fn paint_floating_frames(&self, ui: &egui::Ui, rect: Rect, time: f32, opacity: f32) {
        const FRAMES: [(f32, f32, f32, f32); 5] = [
            (0.16, 0.24, 120.0, 150.0),
            (0.84, 0.20, 100.0, 130.0),
            (0.10, 0.70, 90.0, 115.0),
            (0.88, 0.68, 130.0, 160.0),
            (0.26, 0.88, 80.0, 100.0),
        ];

        let parallax = match (self.reduced_motion(), self.pointer.last()) {
            (false, Some(sample)) => {
                let center = rect.center();
                Vec2::new(sample.x - center.x, sample.y - center.y) / 25.0
            }
            _ => Vec2::ZERO,
        };
        let painter = ui.painter();
        for (index, (fx, fy, w, h)) in FRAMES.iter().enumerate() {
            let bob = if self.reduced_motion() {
                0.0
            } else {
                (time * 0.8 + index as f32 * 1.3).sin() * 7.0
            };
            let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
            let center = Pos2::new(
                rect.left() + rect.width() * fx + parallax.x * direction,
                rect.top() + rect.height() * fy + parallax.y * direction + bob,
            );
            let frame = Rect::from_center_size(center, Vec2::new(*w, *h));
            painter.rect_filled(
                frame,
                8.0,
                theme::with_alpha(theme::CHARCOAL_LIGHT, (150.0 * opacity) as u8),
            );
            painter.rect_stroke(
                frame,
                8.0,
                Stroke::new(1.0, theme::with_alpha(theme::BORDER, (180.0 * opacity) as u8)),
            );
            painter.circle_stroke(
                center,
                (w.min(*h)) * 0.22,
                Stroke::new(1.5, theme::with_alpha(theme::GOLD, (60.0 * opacity) as u8)),
            );
        }
    }

    // --- Portfolio ----------------------------------------------------------

    fn show_portfolio(&mut self, ui: &mut egui::Ui) {
        let (opacity, offset) = self.section_entry(ui, SectionAnchor::Portfolio);
        ui.add_space(offset.max(0.0));
        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                egui::Frame::none()
                    .fill(theme::CHARCOAL)
                    .inner_margin(egui::Margin::symmetric(32.0, 64.0))
                    .show(ui, |ui| {
                        Self::section_header(
                            ui,
                            "MY WORK",
                            "Portfolio",
                            "A curated selection of moments frozen in time, each telling \
                             its own unique story.",
                        );
                        ui.add_space(24.0);
                        self.show_filter_chips(ui);
                        ui.add_space(28.0);
                        self.show_portfolio_grid(ui);
                    });
            })
            .response;
        self.finish_section(SectionAnchor::Portfolio, &response);
    }

    fn show_filter_chips(&mut self, ui: &mut egui::Ui) {
        let mut choices = vec![CategoryFilter::All];
        choices.extend(Category::ALL.into_iter().map(CategoryFilter::Only));

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(10.0, 10.0);
            // Rough centering for the default window width.
            let row_width = choices.len() as f32 * 92.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for choice in choices {
                let active = self.filter.active() == choice;
                let (fill, text_color) = if active {
                    (theme::GOLD, theme::ON_GOLD)
                } else {
                    (theme::MUTED, theme::MUTED_FOREGROUND)
                };
                let chip = ui.add(
                    egui::Button::new(RichText::new(choice.label()).color(text_color))
                        .fill(fill)
                        .rounding(999.0)
                        .min_size(Vec2::new(78.0, 32.0)),
                );
                self.mark_hover(&chip);
                if chip.clicked() {
                    self.filter.set_category(choice);
                }
            }
        });
    }

    fn show_portfolio_grid(&mut self, ui: &mut egui::Ui) {
        // Every catalog item keeps an eased presence value so filtered-out
        // cards shrink away instead of vanishing. Presence is keyed by item
        // id, so re-filtering mid-animation retargets smoothly.
        let active = self.filter.active();
        let ease = self.anim_time(0.4);
        let mut cards: Vec<(&'static PortfolioItem, f32)> = Vec::new();
        for item in CATALOG.iter() {
            let target = if active.matches(item.category) { 1.0 } else { 0.0 };
            let presence = ui.ctx().animate_value_with_time(
                Id::new(("portfolio-card", item.id.0)),
                target,
                ease,
            );
            if presence > 0.01 {
                cards.push((item, presence));
            }
        }

        let gap = 20.0;
        let avail = ui.available_width();
        let columns = ((avail / 320.0).floor() as usize).clamp(1, 3);
        let card_w = (avail - gap * (columns as f32 - 1.0)) / columns as f32;
        let card_h = card_w * 1.2;

        for row in cards.chunks(columns) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for (item, presence) in row {
                    self.show_portfolio_card(ui, item, *presence, Vec2::new(card_w, card_h));
                }
            });
            ui.add_space(gap);
        }
    }

    fn show_portfolio_card(
        &mut self,
        ui: &mut egui::Ui,
        item: &'static PortfolioItem,
        presence: f32,
        size: Vec2,
    ) {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        if !ui.is_rect_visible(rect) {
            return;
        }
        self.mark_hover(&response);

        let mut visual = Rect::from_center_size(rect.center(), rect.size() * (0.85 + 0.15 * presence));
        if response.hovered() && !self.reduced_motion() {
            let tilt = self.pointer.tilt(rect.center().x, rect.center().y, 10.0);
            visual = visual.translate(Vec2::new(-tilt.y_deg, tilt.x_deg) * 0.6);
        }
        let alpha = |base: f32| (base * presence) as u8;

        let painter = ui.painter();
        painter.rect_filled(visual, 12.0, theme::CHARCOAL_LIGHT);
        painter.rect_filled(visual, 12.0, theme::tint_color(item.tint, alpha(90.0)));
        let border = if response.hovered() {
            theme::with_alpha(theme::GOLD, alpha(160.0))
        } else {
            theme::with_alpha(theme::BORDER, alpha(255.0))
        };
        painter.rect_stroke(visual, 12.0, Stroke::new(1.0, border));
        painter.circle_stroke(
            visual.center() - Vec2::new(0.0, 18.0),
            visual.width() * 0.14,
            Stroke::new(1.5, theme::with_alpha(theme::GOLD, alpha(70.0))),
        );

        if response.hovered() {
            if let Some(sample) = self.pointer.last() {
                painter.circle_filled(
                    Pos2::new(sample.x, sample.y).clamp(visual.min, visual.max),
                    42.0,
                    theme::with_alpha(theme::GOLD, alpha(24.0)),
                );
            }
            painter.text(
                visual.center(),
                Align2::CENTER_CENTER,
                "🔍",
                egui::FontId::proportional(26.0),
                theme::with_alpha(theme::GOLD, alpha(220.0)),
            );
        }

        // Caption strip.
        let caption_top = visual.bottom() - 64.0;
        painter.rect_filled(
            Rect::from_min_max(Pos2::new(visual.left(), caption_top), visual.max),
            12.0,
            theme::with_alpha(theme::BACKGROUND, alpha(190.0)),
        );
        painter.text(
            Pos2::new(visual.left() + 16.0, caption_top + 16.0),
            Align2::LEFT_CENTER,
            item.category.label().to_uppercase(),
            egui::FontId::proportional(11.0),
            theme::with_alpha(theme::GOLD, alpha(255.0)),
        );
        painter.text(
            Pos2::new(visual.left() + 16.0, caption_top + 40.0),
            Align2::LEFT_CENTER,
            item.title,
            egui::FontId::proportional(17.0),
            theme::with_alpha(theme::FOREGROUND, alpha(255.0)),
        );

        if response.clicked() {
            self.lightbox = Some(item.id);
        }
    }

    // --- About --------------------------------------------------------------

    fn show_about(&mut self, ui: &mut egui::Ui) {
        let (opacity, offset) = self.section_entry(ui, SectionAnchor::About);
        ui.add_space(offset.max(0.0));
        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(32.0, 64.0))
                    .show(ui, |ui| {
                        ui.columns(2, |columns| {
                            Self::paint_about_portrait(&mut columns[0]);
                            Self::show_about_story(&mut columns[1]);
                        });
                    });
            })
            .response;
        self.finish_section(SectionAnchor::About, &response);
    }

    fn paint_about_portrait(ui: &mut egui::Ui) {
        let width = ui.available_width().min(340.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, width * 4.0 / 3.0), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 14.0, theme::CHARCOAL_LIGHT);
        painter.rect_stroke(rect, 14.0, Stroke::new(1.0, theme::BORDER));
        // Corner accents.
        painter.rect_stroke(
            Rect::from_min_size(rect.min - Vec2::splat(10.0), Vec2::splat(56.0)),
            6.0,
            Stroke::new(1.0, theme::with_alpha(theme::GOLD, 70)),
        );
        painter.rect_stroke(
            Rect::from_min_size(rect.max - Vec2::splat(46.0), Vec2::splat(56.0)),
            6.0,
            Stroke::new(1.0, theme::with_alpha(theme::GOLD, 70)),
        );
        painter.text(
            rect.center() - Vec2::new(0.0, 14.0),
            Align2::CENTER_CENTER,
            "📷",
            egui::FontId::proportional(52.0),
            theme::with_alpha(theme::GOLD, 110),
        );
        painter.text(
            rect.center() + Vec2::new(0.0, 40.0),
            Align2::CENTER_CENTER,
            STUDIO_NAME,
            egui::FontId::proportional(18.0),
            theme::MUTED_FOREGROUND,
        );

        // Experience badge overlapping the lower-right corner.
        let badge = Rect::from_center_size(
            rect.right_bottom() - Vec2::new(34.0, 30.0),
            Vec2::new(132.0, 64.0),
        );
        painter.rect_filled(badge, 10.0, theme::with_alpha(theme::CHARCOAL_LIGHT, 242));
        painter.rect_stroke(badge, 10.0, Stroke::new(1.0, theme::with_alpha(theme::GOLD, 120)));
        painter.text(
            badge.center() - Vec2::new(0.0, 11.0),
            Align2::CENTER_CENTER,
            "10+",
            egui::FontId::proportional(21.0),
            theme::GOLD,
        );
        painter.text(
            badge.center() + Vec2::new(0.0, 13.0),
            Align2::CENTER_CENTER,
            "Years Experience",
            egui::FontId::proportional(11.0),
            theme::MUTED_FOREGROUND,
        );
    }

    fn show_about_story(ui: &mut egui::Ui) {
        ui.label(RichText::new("ABOUT ME").color(theme::GOLD).size(12.0).strong());
        ui.add_space(6.0);
        ui.label(
            RichText::new("The Story Behind the Lens")
                .color(theme::FOREGROUND)
                .size(30.0)
                .strong(),
        );
        ui.add_space(12.0);
        ui.label(RichText::new(
            "With over a decade behind the camera, I've dedicated my life to \
             capturing the fleeting moments that matter most. From intimate \
             weddings to grand landscapes, every frame tells a story.",
        )
        .color(theme::MUTED_FOREGROUND));
        ui.add_space(8.0);
        ui.label(RichText::new(
            "My approach blends documentary honesty with editorial polish. I \
             believe the best photographs happen when people forget the camera \
             is there.",
        )
        .color(theme::MUTED_FOREGROUND));
        ui.add_space(18.0);

        // 2x2 skills grid.
        for pair in SKILLS.chunks(2) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                let cell_w = (ui.available_width() - 12.0) / 2.0;
                for skill in pair {
                    theme::glass_frame().show(ui, |ui| {
                        ui.set_width(cell_w - 36.0);
                        ui.label(
                            RichText::new(skill.label).color(theme::GOLD).strong(),
                        );
                        ui.label(
                            RichText::new(skill.description)
                                .color(theme::MUTED_FOREGROUND)
                                .size(12.0),
                        );
                    });
                }
            });
            ui.add_space(12.0);
        }
    }

    // --- Services -----------------------------------------------------------

    fn show_services(&mut self, ui: &mut egui::Ui) {
        let (opacity, offset) = self.section_entry(ui, SectionAnchor::Services);
        ui.add_space(offset.max(0.0));
        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                egui::Frame::none()
                    .fill(theme::CHARCOAL)
                    .inner_margin(egui::Margin::symmetric(32.0, 64.0))
                    .show(ui, |ui| {
                        Self::section_header(
                            ui,
                            "WHAT I OFFER",
                            "Services",
                            "Professional photography services tailored to your vision, \
                             delivered with artistry and care.",
                        );
                        ui.add_space(28.0);
                        self.show_service_cards(ui);
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            let cta = ui.add(
                                egui::Button::new(
                                    RichText::new("Book a Consultation ➤")
                                        .color(theme::ON_GOLD)
                                        .strong(),
                                )
                                .fill(theme::GOLD)
                                .rounding(999.0)
                                .min_size(Vec2::new(210.0, 44.0)),
                            );
                            self.mark_hover(&cta);
                            if cta.clicked() {
                                self.scroll_target = Some(SectionAnchor::Contact);
                            }
                        });
                    });
            })
            .response;
        self.finish_section(SectionAnchor::Services, &response);
    }

    fn show_service_cards(&mut self, ui: &mut egui::Ui) {
        const ICONS: [&str; 4] = ["📷", "💍", "🎉", "🏢"];
        let gap = 16.0;
        let avail = ui.available_width();
        let columns = ((avail / 280.0).floor() as usize).clamp(1, 4);
        let card_w = (avail - gap * (columns as f32 - 1.0)) / columns as f32;
        let card_h = 360.0;

        let numbered: Vec<(usize, &shared::catalog::ServiceOffering)> =
            SERVICES.iter().enumerate().collect();
        for row in numbered.chunks(columns) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for (index, service) in row.iter().copied() {
                    let (rect, response) = ui.allocate_exact_size(
                        Vec2::new(card_w, card_h),
                        Sense::hover(),
                    );
                    if !ui.is_rect_visible(rect) {
                        continue;
                    }
                    self.mark_hover(&response);

                    let mut visual = rect;
                    if response.hovered() && !self.reduced_motion() {
                        let tilt =
                            self.pointer.tilt(rect.center().x, rect.center().y, 20.0);
                        visual = visual.translate(Vec2::new(-tilt.y_deg, tilt.x_deg) * 0.8);
                    }

                    let painter = ui.painter();
                    painter.rect_filled(visual, 14.0, theme::with_alpha(theme::CHARCOAL_LIGHT, 200));
                    let border = if response.hovered() {
                        theme::with_alpha(theme::GOLD, 140)
                    } else {
                        theme::BORDER
                    };
                    painter.rect_stroke(visual, 14.0, Stroke::new(1.0, border));
                    if response.hovered() {
                        if let Some(sample) = self.pointer.last() {
                            painter.circle_filled(
                                Pos2::new(sample.x, sample.y).clamp(visual.min, visual.max),
                                60.0,
                                theme::with_alpha(theme::GOLD, 16),
                            );
                        }
                    }

                    let icon_center = Pos2::new(visual.center().x, visual.top() + 52.0);
                    painter.circle_filled(icon_center, 26.0, theme::with_alpha(theme::GOLD, 26));
                    painter.text(
                        icon_center,
                        Align2::CENTER_CENTER,
                        ICONS[index.min(ICONS.len() - 1)],
                        egui::FontId::proportional(22.0),
                        theme::GOLD,
                    );
                    painter.text(
                        Pos2::new(visual.center().x, visual.top() + 100.0),
                        Align2::CENTER_CENTER,
                        service.title,
                        egui::FontId::proportional(19.0),
                        theme::FOREGROUND,
                    );

                    let mut line_y = visual.top() + 130.0;
                    for line in wrap_text(service.description, 34) {
                        painter.text(
                            Pos2::new(visual.center().x, line_y),
                            Align2::CENTER_CENTER,
                            line,
                            egui::FontId::proportional(12.5),
                            theme::MUTED_FOREGROUND,
                        );
                        line_y += 17.0;
                    }

                    let mut feature_y = visual.bottom() - 118.0;
                    for feature in service.features {
                        painter.circle_filled(
                            Pos2::new(visual.left() + 22.0, feature_y),
                            2.5,
                            theme::GOLD,
                        );
                        painter.text(
                            Pos2::new(visual.left() + 32.0, feature_y),
                            Align2::LEFT_CENTER,
                            feature,
                            egui::FontId::proportional(12.5),
                            theme::FOREGROUND,
                        );
                        feature_y += 20.0;
                    }

                    painter.line_segment(
                        [
                            Pos2::new(visual.left() + 18.0, visual.bottom() - 46.0),
                            Pos2::new(visual.right() - 18.0, visual.bottom() - 46.0),
                        ],
                        Stroke::new(1.0, theme::BORDER),
                    );
                    painter.text(
                        Pos2::new(visual.center().x, visual.bottom() - 26.0),
                        Align2::CENTER_CENTER,
                        service.price,
                        egui::FontId::proportional(15.0),
                        theme::GOLD,
                    );
                }
            });
            ui.add_space(gap);
        }
    }

    // --- Contact ------------------------------------------------------------

    fn show_contact(&mut self, ui: &mut egui::Ui) {
        let (opacity, offset) = self.section_entry(ui, SectionAnchor::Contact);
        ui.add_space(offset.max(0.0));
        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(32.0, 64.0))
                    .show(ui, |ui| {
                        Self::section_header(
                            ui,
                            "GET IN TOUCH",
                            "Let's Create Together",
                            "Ready to capture your story? Reach out and let's discuss \
                             your vision.",
                        );
                        ui.add_space(28.0);
                        ui.columns(2, |columns| {
                            Self::show_contact_details(&mut columns[0]);
                            self.show_contact_form(&mut columns[1]);
                        });
                    });
            })
            .response;
        self.finish_section(SectionAnchor::Contact, &response);
    }

    fn show_contact_details(ui: &mut egui::Ui) {
        const ICONS: [&str; 3] = ["✉", "📞", "📍"];
        for (index, detail) in CONTACT_DETAILS.iter().enumerate() {
            ui.horizontal(|ui| {
                let (icon_rect, _) =
                    ui.allocate_exact_size(Vec2::splat(40.0), Sense::hover());
                ui.painter().rect_filled(
                    icon_rect,
                    10.0,
                    theme::with_alpha(theme::GOLD, 26),
                );
                ui.painter().text(
                    icon_rect.center(),
                    Align2::CENTER_CENTER,
                    ICONS[index.min(ICONS.len() - 1)],
                    egui::FontId::proportional(17.0),
                    theme::GOLD,
                );
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(detail.label)
                            .color(theme::MUTED_FOREGROUND)
                            .size(11.0),
                    );
                    ui.label(RichText::new(detail.value).color(theme::FOREGROUND));
                });
            });
            ui.add_space(14.0);
        }

        ui.add_space(10.0);
        theme::glass_frame().show(ui, |ui| {
            ui.label(
                RichText::new(
                    "\"Photography is the story I fail to put into words.\"",
                )
                .color(theme::FOREGROUND)
                .italics(),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("— Destin Sparks")
                    .color(theme::GOLD)
                    .size(12.0),
            );
        });
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui) {
        theme::glass_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = 6.0;

            Self::form_label(ui, "Name *");
            let mut name = self.form.field(ContactField::Name).to_string();
            let name_edit = ui.add(
                TextEdit::singleline(&mut name)
                    .hint_text("John Doe")
                    .desired_width(f32::INFINITY),
            );
            if name_edit.changed() {
                self.form.update_field(ContactField::Name, &name);
            }

            Self::form_label(ui, "Email *");
            let mut email = self.form.field(ContactField::Email).to_string();
            let email_edit = ui.add(
                TextEdit::singleline(&mut email)
                    .hint_text("john@example.com")
                    .desired_width(f32::INFINITY),
            );
            if email_edit.changed() {
                self.form.update_field(ContactField::Email, &email);
            }

            Self::form_label(ui, "Service");
            let current = self.form.field(ContactField::Service).to_string();
            let selected_text = if current.is_empty() {
                "Select a service".to_string()
            } else {
                current.clone()
            };
            egui::ComboBox::from_id_salt("contact-service")
                .width(ui.available_width())
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for choice in SERVICE_CHOICES {
                        let label = if choice.is_empty() {
                            "Select a service"
                        } else {
                            choice
                        };
                        if ui
                            .selectable_label(current == choice, label)
                            .clicked()
                        {
                            self.form.update_field(ContactField::Service, choice);
                        }
                    }
                });

            Self::form_label(ui, "Message");
            let mut message = self.form.field(ContactField::Message).to_string();
            let message_edit = ui.add(
                TextEdit::multiline(&mut message)
                    .hint_text("Tell me about your project...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if message_edit.changed() {
                self.form.update_field(ContactField::Message, &message);
            }

            ui.add_space(10.0);
            let submitting = self.form.submitting();
            ui.horizontal(|ui| {
                if submitting {
                    ui.add(egui::Spinner::new().color(theme::GOLD));
                }
                let label = if submitting {
                    "Sending..."
                } else {
                    "Send Message ➤"
                };
                let button = egui::Button::new(
                    RichText::new(label).color(theme::ON_GOLD).strong(),
                )
                .fill(theme::GOLD)
                .rounding(8.0)
                .min_size(Vec2::new(ui.available_width(), 42.0));
                let response = ui.add_enabled(!submitting, button);
                self.mark_hover(&response);
                if response.clicked() {
                    self.submit_contact();
                }
            });
        });
    }

    fn form_label(ui: &mut egui::Ui, text: &str) {
        ui.add_space(6.0);
        ui.label(
            RichText::new(text)
                .color(theme::MUTED_FOREGROUND)
                .size(12.0),
        );
    }

    fn submit_contact(&mut self) {
        match self.form.begin_submit() {
            Ok(message) => {
                tracing::info!(name = %message.name, "contact form submitted");
                let outcome = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitContact { message },
                );
                if let Err(reason) = outcome {
                    // No worker means no UiEvent will ever arrive to clear
                    // the in-flight flags, so roll the form back here.
                    self.form.submit_failed();
                    self.toast = Some(StatusToast::error(format!(
                        "Couldn't send your message: {reason}."
                    )));
                }
            }
            Err(err) => {
                self.toast = Some(StatusToast::error(err.to_string()));
            }
        }
    }

    // --- Footer -------------------------------------------------------------

    fn show_footer(&mut self, ui: &mut egui::Ui) {
        use chrono::Datelike;

        egui::Frame::none()
            .fill(theme::BACKGROUND)
            .inner_margin(egui::Margin::symmetric(32.0, 36.0))
            .show(ui, |ui| {
                ui.separator();
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("📷 {STUDIO_NAME}"))
                            .color(theme::GOLD)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        for social in SOCIAL_LINKS.iter().rev() {
                            let link = ui.add(
                                egui::Button::new(
                                    RichText::new(*social)
                                        .color(theme::MUTED_FOREGROUND)
                                        .size(12.0),
                                )
                                .frame(false),
                            );
                            self.mark_hover(&link);
                        }
                    });
                });
                ui.add_space(12.0);
                let year = chrono::Utc::now().year();
                ui.label(
                    RichText::new(format!(
                        "© {year} {STUDIO_NAME} Photography. All rights reserved."
                    ))
                    .color(theme::MUTED_FOREGROUND)
                    .size(11.0),
                );
            });
    }
}

/// Greedy word wrap for painter-drawn body copy.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::ToastSeverity;
    use crate::ui::app::StartupOptions;

    fn filled_app(
        cmd_tx: crossbeam_channel::Sender<BackendCommand>,
        ui_rx: crossbeam_channel::Receiver<crate::controller::events::UiEvent>,
    ) -> PortfolioApp {
        let mut app = PortfolioApp::new(cmd_tx, ui_rx, StartupOptions::default(), None);
        app.form.update_field(ContactField::Name, "A");
        app.form.update_field(ContactField::Email, "a@a.com");
        app
    }

    #[test]
    fn submit_queues_the_message_and_stays_in_flight() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (_ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        let mut app = filled_app(cmd_tx, ui_rx);

        app.submit_contact();
        assert!(app.form.submitting());
        assert!(app.form.shutter_visible());
        assert!(cmd_rx.try_recv().is_ok());
        assert!(app.toast.is_none());
    }

    #[test]
    fn failed_dispatch_releases_the_form_for_retry() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (_ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        // Dead worker: the command can never be queued, so no delivery event
        // will ever come back to clear the in-flight flags.
        drop(cmd_rx);
        let mut app = filled_app(cmd_tx, ui_rx);

        app.submit_contact();
        assert!(!app.form.submitting());
        assert!(!app.form.shutter_visible());
        let toast = app.toast.clone().expect("error toast raised");
        assert_eq!(toast.severity, ToastSeverity::Error);
        // Everything typed survives for the retry.
        assert_eq!(app.form.field(ContactField::Name), "A");
        assert_eq!(app.form.field(ContactField::Email), "a@a.com");

        // And the retry itself is permitted immediately.
        assert!(app.form.begin_submit().is_ok());
    }

    #[test]
    fn validation_failure_raises_a_toast_without_flags() {
        let (cmd_tx, _cmd_rx) = crossbeam_channel::bounded(4);
        let (_ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        let mut app = PortfolioApp::new(cmd_tx, ui_rx, StartupOptions::default(), None);

        app.submit_contact();
        assert!(!app.form.submitting());
        let toast = app.toast.clone().expect("error toast raised");
        assert_eq!(toast.severity, ToastSeverity::Error);
    }
}
