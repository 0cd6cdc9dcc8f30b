mod loading;

pub(crate) use loading::{render_load_error, render_loading};
