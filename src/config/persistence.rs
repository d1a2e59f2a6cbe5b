//! Where the GUI keeps its control state between sessions

pub struct PersistenceConfig {
    /// eframe storage file for the controls and the raw-chart window (native only)
    pub state_path: &'static str,
    /// Application name handed to eframe; also the window title prefix
    pub app_name: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    state_path: ".states.json",
    app_name: "Patient Admission Prediction",
};
