use {
    chrono::NaiveDate,
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, ScrollArea, SidePanel, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    analysis::SeedSource,
    app::{AppState, Controls},
    config::{DF, GENERATOR, PLOT_CONFIG},
    domain::Variant,
    engine::{APP_TITLE, RenderParams, render_default},
    trace_time,
    ui::{
        ControlAction, PlotView, RangeWindow, UI_CONFIG, UI_TEXT, UiStyleExt, colored_heading,
        forecast_tail_table, raw_tail_table, render_controls,
    },
    utils::today_local,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) controls: Controls,
    pub(crate) raw_window: RangeWindow,
    #[serde(skip)]
    variant: Variant,
    #[serde(skip)]
    seed: SeedSource,
    #[serde(skip)]
    start_date: NaiveDate,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    plot_view: PlotView,
    /// Params of the ViewModel currently on screen
    #[serde(skip)]
    rendered_for: Option<RenderParams>,
    #[serde(skip)]
    force_render: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            controls: Controls::default(),
            raw_window: RangeWindow::default(),
            variant: Variant::default(),
            seed: SeedSource::Entropy,
            start_date: GENERATOR.start_date(),
            state: AppState::default(),
            plot_view: PlotView::new(),
            rendered_for: None,
            force_render: true,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.variant = args.variant;
        app.seed = SeedSource::from(args.seed);
        app.start_date = args.start_date.unwrap_or_else(|| GENERATOR.start_date());
        app.controls.sanitize(app.variant);
        app.state = AppState::Empty;
        app.rendered_for = None;
        app.force_render = true;

        if DF.log_controls {
            log::info!(
                "Starting {} dashboard with {:?}, seed {:?}",
                app.variant,
                app.controls,
                app.seed
            );
        }
        app
    }

    fn params(&self, today: NaiveDate) -> RenderParams {
        RenderParams::new(self.variant, today)
            .with_category(self.controls.category)
            .with_horizon(self.controls.horizon)
            .with_seed(self.seed)
            .with_start_date(self.start_date)
    }

    fn refresh(&mut self) {
        self.refresh_at(today_local());
    }

    /// Recomputes the ViewModel when the params (today included) moved or a regenerate was requested.
    fn refresh_at(&mut self, today: NaiveDate) {
        let params = self.params(today);
        if !self.force_render && self.rendered_for == Some(params) {
            return;
        }
        self.force_render = false;
        self.rendered_for = Some(params);

        self.state = trace_time!("Full render", 100_000, {
            match render_default(&params) {
                Ok(vm) => AppState::Ready(Box::new(vm)),
                Err(e) => {
                    log::error!("Render failed for {:?}: {:#}", params, e);
                    AppState::Failed(format!("{:#}", e))
                }
            }
        });
    }

    fn handle_action(&mut self, action: ControlAction) {
        if DF.log_controls {
            log::info!("Control action {:?} -> {:?}", action, self.controls);
        }
        match action {
            ControlAction::Changed => {}
            ControlAction::Regenerate => {
                self.seed = self.seed.advance();
                self.force_render = true;
            }
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::left("controls_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(action) =
                    render_controls(ui, &mut self.controls, self.variant, self.seed)
                {
                    self.handle_action(action);
                }
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match &self.state {
                AppState::Empty => {
                    ui.label_subdued(&UI_TEXT.cp_rendering);
                }
                AppState::Failed(message) => {
                    ui.label_error(format!("{}: {}", UI_TEXT.error_render_failed, message));
                    ui.label_subdued(&UI_TEXT.error_retry_hint);
                }
                AppState::Ready(vm) => {
                    let spacing = UI_CONFIG.section_spacing;
                    ScrollArea::vertical().show(ui, |ui| {
                        ui.label_subheader(vm.data_heading.as_str());
                        raw_tail_table(ui, &vm.raw_columns, &vm.raw_tail);
                        ui.add_space(spacing);

                        self.plot_view
                            .show_raw_chart(ui, &vm.raw_chart, &mut self.raw_window);
                        ui.add_space(spacing);

                        ui.label_subheader(vm.forecast_heading.as_str());
                        forecast_tail_table(ui, &vm.forecast_tail);
                        ui.add_space(spacing);

                        ui.label(vm.forecast_caption.as_str());
                        self.plot_view.show_forecast_chart(ui, &vm.forecast_chart);
                        ui.add_space(spacing);

                        ui.label(vm.components_heading.as_str());
                        self.plot_view.show_components(ui, &vm.components);
                    });
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        TopBottomPanel::top("title_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.label(colored_heading(APP_TITLE));
            });
        self.render_side_panel(ctx);
        self.refresh();
        self.render_central_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_controls {
            log::info!(
                "SAVE [App]: controls = {:?}, window = {:?}",
                self.controls,
                self.raw_window
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
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
    visuals.widgets.noninteractive.bg_stroke.color = PLOT_CONFIG.color_widget_border;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
