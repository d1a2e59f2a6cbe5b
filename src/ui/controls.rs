use eframe::egui::{ComboBox, Slider, Ui};

use crate::analysis::SeedSource;
use crate::app::Controls;
use crate::config::PLOT_CONFIG;
use crate::domain::{Horizon, Variant};
use crate::ui::{UI_TEXT, UiStyleExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// A control value changed; re-render with the new params
    Changed,
    /// Same params, fresh randomness
    Regenerate,
}

/// Category selector (by-category dashboard only), horizon slider and Regenerate.
pub fn render_controls(
    ui: &mut Ui,
    controls: &mut Controls,
    variant: Variant,
    seed: SeedSource,
) -> Option<ControlAction> {
    let mut action = None;
    let before = *controls;

    ui.label_subheader(&UI_TEXT.controls_heading);
    ui.metric(
        &UI_TEXT.label_variant,
        &variant.to_string(),
        PLOT_CONFIG.color_text_primary,
    );
    let seed_text = match seed {
        SeedSource::Fixed(s) => s.to_string(),
        SeedSource::Entropy => UI_TEXT.label_seed_entropy.clone(),
    };
    ui.metric(
        &UI_TEXT.label_seed_fixed,
        &seed_text,
        PLOT_CONFIG.color_text_neutral,
    );
    ui.add_space(6.0);

    if variant.has_category_selector() {
        ComboBox::from_label(&UI_TEXT.label_category)
            .selected_text(controls.category.to_string())
            .show_ui(ui, |ui| {
                for &category in variant.categories() {
                    ui.selectable_value(&mut controls.category, category, category.to_string());
                }
            });
        ui.add_space(4.0);
    }

    let mut years = controls.horizon.years();
    ui.label(&UI_TEXT.label_years);
    ui.add(Slider::new(
        &mut years,
        Horizon::MIN.years()..=Horizon::MAX.years(),
    ));
    if let Ok(horizon) = Horizon::new(years) {
        controls.horizon = horizon;
    }

    if *controls != before {
        action = Some(ControlAction::Changed);
    }

    ui.add_space(8.0);
    if ui
        .button(ui.button_text_primary(&UI_TEXT.label_regenerate))
        .on_hover_text(&UI_TEXT.hover_regenerate)
        .clicked()
    {
        action = Some(ControlAction::Regenerate);
    }

    action
}
