//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// Always-on reference marker at the inferred change point
    pub change_point_color: Color32,
    pub change_point_width: f32,
    /// Transient marker at the hovered event's date
    pub hover_marker_color: Color32,
    pub hover_marker_width: f32,

    /// Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(88, 166, 255), // Accent blue
    price_line_width: 1.2,
    change_point_color: Color32::from_rgb(248, 81, 73), // Accent red
    change_point_width: 1.5,
    hover_marker_color: Color32::from_rgb(188, 140, 255), // Accent purple
    hover_marker_width: 2.0,

    plot_y_padding_pct: 0.05,

    color_profit: Color32::from_rgb(63, 185, 80),
    color_loss: Color32::from_rgb(248, 81, 73),
    color_info: Color32::from_rgb(88, 166, 255),
    color_warning: Color32::from_rgb(210, 153, 34),

    color_text_neutral: Color32::WHITE,
    color_text_primary: Color32::from_rgb(201, 209, 217),
    color_text_subdued: Color32::from_rgb(110, 118, 129),
};
