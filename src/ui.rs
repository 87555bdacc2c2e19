use egui::{Color32, Context, RichText};

use crate::model::{Command, GameState, Rect, Status};
use crate::view::draw;
use crate::view::{Color, EguiSurface, RenderSurface};

/// Build the playfield and overlays; returns the egui output and the command
/// requested through the start/restart controls, if any.
///
/// Only draws: egui may run the closure more than once per frame, so the
/// state must already be advanced.
pub fn build_ui(
    egui_ctx: &Context,
    raw_input: egui::RawInput,
    state: &GameState,
    now_ms: f64,
) -> (egui::FullOutput, Option<Command>) {
    let mut requested = None;

    let output = egui_ctx.run(raw_input, |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let mut surface = EguiSurface::new(&painter);
        draw::draw_frame(&mut surface, state, now_ms);

        match state.status() {
            Status::Idle => {
                if draw_start_button(ctx) {
                    requested = Some(Command::Start);
                }
            }
            Status::Crashed => {
                let config = state.config();
                surface.fill_rect(Rect::new(0.0, 0.0, config.width, config.height), Color::OVERLAY);
                if draw_crash_overlay(ctx, state.score()) {
                    requested = Some(Command::Restart);
                }
            }
            Status::Running => {}
        }
    });

    (output, requested)
}

fn draw_start_button(ctx: &Context) -> bool {
    egui::Area::new(egui::Id::new("start"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add(
                egui::Button::new(RichText::new("Play").size(24.0).color(Color32::WHITE))
                    .fill(Color32::RED)
                    .min_size(egui::vec2(160.0, 64.0)),
            )
            .clicked()
        })
        .inner
}

fn draw_crash_overlay(ctx: &Context, score: u64) -> bool {
    egui::Area::new(egui::Id::new("crash"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("CRASH! Your Score: {score}"))
                        .size(24.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(20.0);
                ui.add(
                    egui::Button::new(RichText::new("Restart").size(20.0).color(Color32::WHITE))
                        .fill(Color32::RED)
                        .min_size(egui::vec2(120.0, 44.0)),
                )
                .clicked()
            })
            .inner
        })
        .inner
}
