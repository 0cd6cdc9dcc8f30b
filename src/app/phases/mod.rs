mod failed;
mod loading;
mod running;

use eframe::egui::Context;

use crate::app::{App, AppState};

/// One tick of the phase state machine: render this phase and return the
/// phase to be in next frame.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
