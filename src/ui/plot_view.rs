use chrono::{Datelike, NaiveDate};
use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, HPlacement, Line, LineStyle, Plot, PlotPoints, VLine, VPlacement};

use crate::config::{ANALYSIS, plot::PLOT_CONFIG};
use crate::data::PricePoint;
use crate::ui::UI_TEXT;

/// Renders the price timeline with two overlay markers: the fixed
/// change-point reference line (always shown) and the transient hover
/// marker (only while an event row is hovered).
#[derive(Default)]
pub(crate) struct PlotView {
    // The price series is immutable once loaded, so project it once.
    points: Option<Vec<[f64; 2]>>,
}

pub(crate) fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Overlay contract: fixed marker first, hover marker second. The fixed
/// marker does not depend on the hover selection.
pub(crate) fn overlay_markers(hover_date: Option<NaiveDate>) -> (f64, Option<f64>) {
    (
        date_to_x(ANALYSIS.change_point_date()),
        hover_date.map(date_to_x),
    )
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.clone())
        .formatter(|mark, _range| {
            x_to_date(mark.value)
                .map(|d| d.year().to_string())
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.clone())
        .formatter(|mark, _range| format!("${:.0}", mark.value))
        .placement(HPlacement::Right)
}

impl PlotView {
    fn projected_points(&mut self, prices: &[PricePoint]) -> Vec<[f64; 2]> {
        if self.points.is_none() {
            self.points = Some(
                prices
                    .iter()
                    .map(|p| [date_to_x(p.date), p.price])
                    .collect(),
            );
        }
        self.points.clone().unwrap_or_default()
    }

    pub(crate) fn show(&mut self, ui: &mut Ui, prices: &[PricePoint], hover_date: Option<NaiveDate>) {
        let points = self.projected_points(prices);
        let (change_x, hover_x) = overlay_markers(hover_date);

        Plot::new("price_plot")
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_price_axis()])
            .label_formatter(|_, value| {
                match x_to_date(value.x) {
                    Some(date) => format!("{}\n${:.2}", date.format("%Y-%m-%d"), value.y),
                    None => String::new(),
                }
            })
            .allow_double_click_reset(true)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: true, y: false })
            .allow_zoom(Vec2b { x: true, y: false })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.plot_series_name.clone(), PlotPoints::new(points))
                        .color(PLOT_CONFIG.price_line_color)
                        .width(PLOT_CONFIG.price_line_width),
                );

                plot_ui.vline(
                    VLine::new(UI_TEXT.label_change_point.clone(), change_x)
                        .color(PLOT_CONFIG.change_point_color)
                        .width(PLOT_CONFIG.change_point_width)
                        .style(LineStyle::dashed_loose()),
                );

                if let Some(x) = hover_x {
                    plot_ui.vline(
                        VLine::new("", x)
                            .color(PLOT_CONFIG.hover_marker_color)
                            .width(PLOT_CONFIG.hover_marker_width),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_projection_roundtrips() {
        for d in [date(1987, 5, 20), date(2005, 3, 2), date(2010, 12, 31)] {
            assert_eq!(x_to_date(date_to_x(d)), Some(d));
        }
    }

    #[test]
    fn date_projection_is_chronological() {
        assert!(date_to_x(date(2000, 1, 1)) < date_to_x(date(2005, 3, 2)));
        assert!(date_to_x(date(2005, 3, 2)) < date_to_x(date(2010, 1, 1)));
    }

    #[test]
    fn change_point_marker_is_invariant_under_hover() {
        let (fixed_without, hover_none) = overlay_markers(None);
        let (fixed_with, hover_some) = overlay_markers(Some(date(2008, 9, 15)));

        assert_eq!(fixed_without, fixed_with);
        assert_eq!(fixed_without, date_to_x(date(2005, 3, 2)));
        assert_eq!(hover_none, None);
        assert_eq!(hover_some, Some(date_to_x(date(2008, 9, 15))));
    }
}
