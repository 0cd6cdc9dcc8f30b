use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{
        mem,
        sync::mpsc::{self, Receiver},
    },
};

use crate::{
    Cli,
    app::{
        AppState, FailedState, HoverState, LoadOutcome, LoadProgress, LoadingState, PhaseView,
        RunningState,
    },
    data::{DashboardData, FetchEvent, LoadToken, spawn_load_session},
    ui::{PlotView, UI_CONFIG, render_load_error, render_loading},
};

/// One dashboard session. Constructed once per view lifetime; construction
/// is the single network-triggering operation, teardown cancels the load
/// token so late responses are dropped.
pub struct App {
    pub(crate) dashboard: Option<DashboardData>,
    pub(crate) hover: HoverState,
    pub(crate) plot_view: PlotView,
    pub(crate) progress: LoadProgress,
    pub(crate) fetch_rx: Option<Receiver<FetchEvent>>,
    state: AppState,
    load_token: LoadToken,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel();
        let load_token = LoadToken::default();

        log::info!("Starting load session against {}", args.api_base);
        spawn_load_session(args.api_base, fetch_tx, load_token.clone());

        Self {
            dashboard: None,
            hover: HoverState::default(),
            plot_view: PlotView::default(),
            progress: LoadProgress::default(),
            fetch_rx: Some(fetch_rx),
            state: AppState::default(),
            load_token,
        }
    }

    /// LOADING PHASE: drain completions, settle if possible, else spin.
    pub(crate) fn tick_loading_state(
        &mut self,
        ctx: &Context,
        state: &mut LoadingState,
    ) -> AppState {
        self.drain_fetch_events();
        ctx.request_repaint();

        if let Some(outcome) = self.progress.outcome() {
            return match outcome {
                LoadOutcome::Ready(data) => {
                    log::info!(
                        "Load complete: {} price points, {} events",
                        data.prices.len(),
                        data.events.len()
                    );
                    self.dashboard = Some(data);
                    AppState::Running(RunningState)
                }
                LoadOutcome::Failed(message) => {
                    // A failed load is terminal for the session; whatever is
                    // still in flight gets discarded on arrival.
                    self.fetch_rx = None;
                    AppState::Failed(FailedState { message })
                }
            };
        }

        render_loading(ctx, &self.progress);
        AppState::Loading(state.clone())
    }

    pub(crate) fn tick_failed_state(&mut self, ctx: &Context, state: &mut FailedState) -> AppState {
        // Hover is only meaningful while data is on screen.
        self.hover.clear();
        render_load_error(ctx, &state.message);
        AppState::Failed(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) -> AppState {
        self.render_header_panel(ctx);
        self.render_stats_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_events_panel(ctx);
        self.render_chart_panel(ctx);
        AppState::Running(RunningState)
    }

    fn drain_fetch_events(&mut self) {
        if let Some(rx) = &self.fetch_rx {
            while let Ok(event) = rx.try_recv() {
                log::debug!("Fetch completion received for {}", event.endpoint());
                self.progress.record(event);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.load_token.cancel();
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
