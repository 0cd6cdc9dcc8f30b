use {
    crate::{config::plot::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{Color32, Frame, Margin, RichText, Stroke, Ui},
};

pub(crate) trait UiStyleExt {
    /// Bordered card with a subdued label over a large colored value.
    fn stat_card(&mut self, label: &str, value: &str, value_color: Color32);

    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn stat_card(&mut self, label: &str, value: &str, value_color: Color32) {
        Frame {
            fill: UI_CONFIG.colors.side_panel,
            stroke: Stroke::new(1.0, UI_CONFIG.colors.widget_border),
            inner_margin: Margin::same(10),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.vertical(|ui| {
                ui.set_min_width(140.0);
                ui.label(
                    RichText::new(label)
                        .small()
                        .color(PLOT_CONFIG.color_text_subdued),
                );
                ui.label(RichText::new(value).size(20.0).strong().color(value_color));
            });
        });
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }
}
