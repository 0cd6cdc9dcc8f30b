use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,
    pub label_model_status: String,
    pub status_converged: String,

    // --- STAT CARDS ---
    pub stat_regime1: String,
    pub stat_regime2: String,
    pub stat_volatility: String,
    pub stat_shift: String,

    // --- PANELS ---
    pub panel_chart_title: String,
    pub panel_events_title: String,
    pub footer: String,

    // --- LOADING SCREEN ---
    pub ls_title: String,
    pub ls_waiting: String,
    pub ls_done: String,

    // --- ERRORS ---
    pub error_title: String,
    pub error_load_failed: String,
    pub error_retry_hint: String,

    // --- PLOT LABELS ---
    pub plot_series_name: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub label_change_point: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Brent Oil Price Change Point Analysis".into(),
    label_model_status: "Model Status:".into(),
    status_converged: "Converged".into(),

    stat_regime1: "Regime 1 Mean (Pre-2005)".into(),
    stat_regime2: "Regime 2 Mean (Post-2005)".into(),
    stat_volatility: "Log Return Volatility".into(),
    stat_shift: "Relative Shift".into(),

    panel_chart_title: "Historical Price Timeline & Regime Shift".into(),
    panel_events_title: "Geopolitical Events Impact".into(),
    footer: "Interactive dashboard for the Brent change point analysis project".into(),

    ls_title: "Loading Analysis Data".into(),
    ls_waiting: "Fetching the price series, events and model results...".into(),
    ls_done: "ready".into(),

    error_title: "Dashboard Unavailable".into(),
    // One aggregated message for transport and payload failures alike; it
    // never names the endpoint that failed.
    error_load_failed: "The analysis backend is unreachable or returned an invalid response."
        .into(),
    error_retry_hint: "Restart the dashboard once the backend is running to try again.".into(),

    plot_series_name: "Brent".into(),
    plot_x_axis: "Date".into(),
    plot_y_axis: "USD/bbl".into(),
    label_change_point: "Change Point".into(),
});
