mod dashboard;
mod plot_view;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use plot_view::PlotView;
pub(crate) use screens::{render_load_error, render_loading};
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
