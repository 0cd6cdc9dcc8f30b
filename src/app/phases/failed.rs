// app/phases/failed.rs

use eframe::egui::Context;

use crate::app::{App, AppState, FailedState, phases::PhaseView};

impl PhaseView for FailedState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_failed_state(ctx, self)
    }
}
