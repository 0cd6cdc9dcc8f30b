use {
    crate::{app::LoadProgress, config::plot::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, Grid, RichText, Ui},
};

pub(crate) fn render_loading(ctx: &Context, progress: &LoadProgress) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.label(
                RichText::new(&UI_TEXT.ls_waiting)
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.add_space(20.0);
            render_endpoint_grid(ui, progress);
        });
    });
}

fn render_endpoint_grid(ui: &mut Ui, progress: &LoadProgress) {
    Grid::new("endpoint_grid")
        .striped(true)
        .spacing([20.0, 10.0])
        .min_col_width(160.0)
        .show(ui, |ui| {
            for (name, done) in progress.statuses() {
                ui.label(
                    RichText::new(name)
                        .strong()
                        .color(PLOT_CONFIG.color_text_primary),
                );
                if done {
                    ui.label(RichText::new(&UI_TEXT.ls_done).color(PLOT_CONFIG.color_profit));
                } else {
                    ui.spinner();
                }
                ui.end_row();
            }
        });
}

pub(crate) fn render_load_error(ctx: &Context, message: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(140.0);
            ui.heading(
                RichText::new(&UI_TEXT.error_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_loss),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(message).color(PLOT_CONFIG.color_text_primary));
            ui.add_space(5.0);
            ui.label(
                RichText::new(&UI_TEXT.error_retry_hint)
                    .italics()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        });
    });
}
