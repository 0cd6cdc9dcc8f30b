// Running-phase panels: header, stat cards, event list with hover
// highlighting, and the central price chart.

use eframe::egui::{
    Align, CentralPanel, Context, Frame, Layout, RichText, ScrollArea, Sense, SidePanel, Stroke,
    TopBottomPanel, Ui,
};

use crate::{
    app::App,
    config::{ANALYSIS, plot::PLOT_CONFIG},
    data::MarketEvent,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
};

impl App {
    pub(crate) fn render_header_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("header_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} (R-hat {:.2})",
                                UI_TEXT.status_converged, ANALYSIS.rhat
                            ))
                            .color(PLOT_CONFIG.color_profit),
                        );
                        ui.label_subdued(UI_TEXT.label_model_status.as_str());
                    });
                });
            });
    }

    pub(crate) fn render_stats_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("stats_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.stat_card(
                        &UI_TEXT.stat_regime1,
                        &format!("${:.2}", ANALYSIS.regime_1_mean),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.stat_card(
                        &UI_TEXT.stat_regime2,
                        &format!("${:.2}", ANALYSIS.regime_2_mean),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.stat_card(
                        &UI_TEXT.stat_volatility,
                        &format!("{:.3}", ANALYSIS.log_return_volatility),
                        PLOT_CONFIG.hover_marker_color,
                    );
                    ui.stat_card(
                        &UI_TEXT.stat_shift,
                        &format!("+{:.1}%", ANALYSIS.relative_shift_pct),
                        PLOT_CONFIG.color_profit,
                    );
                });
            });
    }

    pub(crate) fn render_events_panel(&mut self, ctx: &Context) {
        SidePanel::right("events_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label_subheader(UI_TEXT.panel_events_title.as_str());
                ui.separator();

                let Some(data) = &self.dashboard else { return };

                // HoverState is Copy: mutate a local while the event list is
                // borrowed, then write the result back.
                let mut hover = self.hover;
                ScrollArea::vertical().show(ui, |ui| {
                    for (idx, event) in data.events.iter().enumerate() {
                        let is_active = hover.active() == Some(idx);
                        let response = render_event_row(ui, event, is_active);
                        if response.hovered() {
                            hover.enter(idx);
                        } else {
                            hover.leave(idx);
                        }
                    }
                });
                self.hover = hover;
            });
    }

    pub(crate) fn render_chart_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label_subheader(UI_TEXT.panel_chart_title.as_str());

                let Some(data) = &self.dashboard else { return };
                let hover_date = self
                    .hover
                    .active()
                    .and_then(|idx| data.events.get(idx))
                    .map(|event| event.date);

                self.plot_view.show(ui, &data.prices, hover_date);
            });
    }

    pub(crate) fn render_footer_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label_subdued(UI_TEXT.footer.as_str());
                });
            });
    }
}

fn render_event_row(ui: &mut Ui, event: &MarketEvent, is_active: bool) -> eframe::egui::Response {
    let stroke = if is_active {
        Stroke::new(1.0, PLOT_CONFIG.hover_marker_color)
    } else {
        Stroke::new(1.0, UI_CONFIG.colors.widget_border)
    };

    let inner = Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(event.date.format("%Y-%m-%d").to_string())
                .small()
                .color(PLOT_CONFIG.color_info),
        );
        ui.label(
            RichText::new(&event.description)
                .strong()
                .color(PLOT_CONFIG.color_text_primary),
        );
        ui.label(
            RichText::new(&event.category)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    });

    inner.response.interact(Sense::hover())
}
