//! Intro overlay drawn above the already-built dossier.

use std::time::Instant;

use egui::{Align2, Color32, Context, FontId, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vcb_core::ExitTrigger;
use vcb_core::splash::IntroStage;
use vcb_model::Brand;

use crate::state::Splash;
use crate::theme::colors;

const STAR_COUNT: usize = 140;
const STAR_SEED: u64 = 0x4_51;

#[derive(Debug, Clone, Copy)]
struct Star {
    /// Position as a fraction of the lower half of the screen.
    x: f32,
    y: f32,
    radius: f32,
    phase: f32,
    speed: f32,
}

/// Decorative star layer for the lower half of the intro.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    created: Instant,
}

impl Starfield {
    pub fn new(created: Instant) -> Self {
        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                radius: rng.gen_range(0.4..1.6),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                speed: rng.gen_range(0.6..2.2),
            })
            .collect();
        Self { stars, created }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Star brightness in `[0.2, 1]` at `now`.
    fn brightness(&self, star: &Star, now: Instant) -> f32 {
        let t = now.saturating_duration_since(self.created).as_secs_f32();
        0.6 + 0.4 * (t * star.speed + star.phase).sin()
    }

    fn paint(&self, painter: &egui::Painter, area: Rect, alpha: f32, now: Instant) {
        for star in &self.stars {
            let center = pos2(
                area.left() + star.x * area.width(),
                area.top() + star.y * area.height(),
            );
            let brightness = self.brightness(star, now) * alpha;
            painter.circle_filled(center, star.radius, Color32::WHITE.gamma_multiply(brightness));
        }
    }
}

fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}

/// Upward arrow mark, rising into place as it fades in.
fn arrow_mark(center: Pos2, opacity: f32) -> Vec<Shape> {
    let rise = 40.0 * (1.0 - opacity);
    let scale = 0.9 + 0.1 * opacity;
    let color = with_alpha(colors::SUCCESS, opacity);
    let c = center + vec2(0.0, rise);
    let head = vec![
        c + vec2(0.0, -44.0) * scale,
        c + vec2(30.0, -10.0) * scale,
        c + vec2(-30.0, -10.0) * scale,
    ];
    let shaft = Rect::from_center_size(c + vec2(0.0, 10.0) * scale, vec2(18.0, 40.0) * scale);
    vec![
        Shape::convex_polygon(head, color, Stroke::NONE),
        Shape::rect_filled(shaft, 2.0, color),
    ]
}

/// Draws the overlay and reports any exit the user asked for.
pub fn splash_overlay(
    ctx: &Context,
    splash: &Splash,
    brand: &Brand,
    starfield: &Starfield,
    now: Instant,
) -> Option<ExitTrigger> {
    let screen = ctx.screen_rect();
    // The overlay fades out as the reveal progresses.
    let alpha = 1.0 - splash.progress(now) / 100.0;
    let mut trigger = None;

    egui::Area::new(egui::Id::new("splash-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let background = ui.allocate_rect(screen, Sense::click());
            let painter = ui.painter();

            let (sky, ground) = screen.split_top_bottom_at_fraction(0.5);
            painter.rect_filled(sky, 0.0, with_alpha(colors::NAVY, alpha));
            painter.rect_filled(ground, 0.0, with_alpha(colors::GROUND, alpha));
            if !splash.options().reduced_motion {
                starfield.paint(painter, ground, alpha, now);
            }

            let center = screen.center();
            let logo = splash.stage_opacity(IntroStage::Logo, now) * alpha;
            painter.text(
                center + vec2(0.0, -120.0),
                Align2::CENTER_CENTER,
                &brand.company,
                FontId::proportional(44.0),
                with_alpha(Color32::WHITE, logo),
            );
            let caption = splash.stage_opacity(IntroStage::Caption, now) * alpha;
            painter.text(
                center + vec2(0.0, -60.0),
                Align2::CENTER_CENTER,
                "Presents Dossier for",
                FontId::proportional(22.0),
                with_alpha(colors::GOLD, caption),
            );
            let base = splash.stage_opacity(IntroStage::BaseMark, now) * alpha;
            painter.text(
                center + vec2(0.0, 90.0),
                Align2::CENTER_CENTER,
                brand.product.to_uppercase(),
                FontId::proportional(30.0),
                with_alpha(Color32::WHITE, base),
            );
            let arrow = splash.stage_opacity(IntroStage::Arrow, now) * alpha;
            painter.extend(arrow_mark(center + vec2(0.0, 30.0), arrow));

            let skip_alpha = splash.skip_opacity(now) * alpha;
            let skip_rect = Rect::from_min_size(
                pos2(screen.right() - 160.0, screen.bottom() - 64.0),
                vec2(128.0, 32.0),
            );
            let skip = ui.put(
                skip_rect,
                egui::Button::new(
                    egui::RichText::new("Skip intro →").color(with_alpha(colors::GOLD, skip_alpha)),
                )
                .frame(false),
            );

            if skip.clicked() {
                trigger = Some(ExitTrigger::SkipButton);
            } else if background.clicked() {
                trigger = Some(ExitTrigger::Click);
            }
        });
    trigger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starfield_is_deterministic() {
        let now = Instant::now();
        let a = Starfield::new(now);
        let b = Starfield::new(now);
        assert_eq!(a.len(), STAR_COUNT);
        for (left, right) in a.stars.iter().zip(&b.stars) {
            assert_eq!(left.x, right.x);
            assert_eq!(left.y, right.y);
        }
    }

    #[test]
    fn brightness_stays_visible() {
        let now = Instant::now();
        let field = Starfield::new(now);
        for star in &field.stars {
            let value = field.brightness(star, now + std::time::Duration::from_millis(1234));
            assert!((0.2..=1.0).contains(&value));
        }
    }
}
