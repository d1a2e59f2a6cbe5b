//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Log every full re-render triggered by the host loop
    pub log_render: bool,

    /// Fitted trend/seasonality summary after each fit
    pub log_forecast_fit: bool,

    /// Control changes coming from the UI
    pub log_controls: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: true,
    log_render: true,
    log_forecast_fit: false,
    log_controls: false,
};
