use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::models::{DayRow, ForecastRow};
use crate::ui::{UI_CONFIG, UI_TEXT, get_effect_color};
use crate::utils::format_date;

/// Wide-format tail of the generated history: Date plus one column per category.
pub fn raw_tail_table(ui: &mut Ui, columns: &[String], rows: &[DayRow]) {
    let row_height = UI_CONFIG.table_row_height;
    TableBuilder::new(ui)
        .id_salt("raw_tail_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(70.0), columns.len().saturating_sub(1))
        .header(row_height + 2.0, |mut header| {
            for name in columns {
                header.col(|ui| {
                    ui.label(RichText::new(name).strong());
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(format_date(row.date));
                    });
                    for count in &row.counts {
                        table_row.col(|ui| {
                            ui.label(count.to_string());
                        });
                    }
                });
            }
        });
}

/// Tail of the forecast frame with bounds and components.
pub fn forecast_tail_table(ui: &mut Ui, rows: &[ForecastRow]) {
    let row_height = UI_CONFIG.table_row_height;
    let headers = [
        &UI_TEXT.col_ds,
        &UI_TEXT.col_trend,
        &UI_TEXT.col_yhat_lower,
        &UI_TEXT.col_yhat_upper,
        &UI_TEXT.col_weekly,
        &UI_TEXT.col_yearly,
        &UI_TEXT.col_yhat,
    ];

    TableBuilder::new(ui)
        .id_salt("forecast_tail_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(80.0), headers.len() - 1)
        .header(row_height + 2.0, |mut header| {
            for name in headers {
                header.col(|ui| {
                    ui.label(RichText::new(name.as_str()).strong());
                });
            }
        })
        .body(|mut body| {
            for r in rows {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(format_date(r.ds));
                    });
                    for value in [r.trend, r.yhat_lower, r.yhat_upper] {
                        table_row.col(|ui| {
                            ui.label(format!("{:.3}", value));
                        });
                    }
                    for effect in [r.weekly, r.yearly] {
                        table_row.col(|ui| {
                            ui.label(
                                RichText::new(format!("{:+.3}", effect))
                                    .color(get_effect_color(effect)),
                            );
                        });
                    }
                    table_row.col(|ui| {
                        ui.label(RichText::new(format!("{:.3}", r.yhat)).strong());
                    });
                });
            }
        });
}
