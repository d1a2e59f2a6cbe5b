use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Panel and text colours for the dashboard
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Layout settings shared by every panel
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Row height for the tail tables
    pub table_row_height: f32,
    /// Vertical gap between page sections
    pub section_spacing: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    table_row_height: 18.0,
    section_spacing: 14.0,
};

fn panel_frame(fill: Color32, inner_margin: Margin) -> Frame {
    Frame {
        fill,
        stroke: Stroke::NONE,
        inner_margin,
        ..Default::default()
    }
}

impl UiConfig {
    /// Controls column on the left
    pub fn side_panel_frame(&self) -> Frame {
        panel_frame(self.colors.side_panel, Margin::same(10))
    }

    /// Title bar
    pub fn top_panel_frame(&self) -> Frame {
        panel_frame(self.colors.side_panel, Margin::symmetric(12, 6))
    }

    /// Scrolling page with tables and charts
    pub fn central_panel_frame(&self) -> Frame {
        panel_frame(self.colors.central_panel, Margin::symmetric(12, 8))
    }
}
