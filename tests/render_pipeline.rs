use admission_forecast::{
    AdditiveModel, Category, ForecastEngine, Horizon, RenderParams, SeedSource, Variant,
    analysis::{SyntheticSeriesGenerator, build_request},
    render, render_default,
};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_year_params(variant: Variant) -> RenderParams {
    RenderParams::new(variant, ymd(2024, 1, 31)).with_seed(SeedSource::Fixed(2024))
}

#[test]
fn aggregate_dashboard_end_to_end() {
    let vm = render_default(&two_year_params(Variant::Aggregate)).unwrap();
    let history_days = (ymd(2024, 1, 31) - ymd(2022, 1, 1)).num_days() as usize + 1;

    assert_eq!(vm.category, Category::Admissions);
    assert_eq!(vm.raw_chart.traces[0].points.len(), history_days);
    assert_eq!(vm.forecast_chart.yhat.len(), history_days + 365);
    assert!(vm.components.weekly.is_some());
    assert!(vm.components.yearly.is_some());

    for (lo, (mid, hi)) in vm
        .forecast_chart
        .lower
        .iter()
        .zip(vm.forecast_chart.yhat.iter().zip(&vm.forecast_chart.upper))
    {
        assert!(lo[1] <= mid[1] && mid[1] <= hi[1]);
    }

    let summary = vm.summary();
    assert_eq!(summary.history_start, Some(ymd(2022, 1, 1)));
    assert_eq!(summary.history_end, Some(ymd(2024, 1, 31)));
    assert!((summary.history_mean - 20.0).abs() < 1.0);
}

#[test]
fn every_category_and_horizon_renders() {
    for &category in Variant::ByCategory.categories() {
        for horizon in Horizon::all() {
            let params = two_year_params(Variant::ByCategory)
                .with_category(category)
                .with_horizon(horizon)
                .with_start_date(ymd(2023, 6, 1));
            let vm = render_default(&params).unwrap();
            assert_eq!(vm.data_heading, format!("{} Admissions Data", category));
            assert_eq!(
                vm.forecast_caption,
                format!("Forecast plot for {} years", horizon.years())
            );
            let appended = vm.forecast_chart.yhat.len() - vm.forecast_chart.observed.len();
            assert_eq!(appended, horizon.days() as usize);
        }
    }
}

#[test]
fn reproducible_with_a_fixed_seed() {
    let params = two_year_params(Variant::ByCategory).with_category(Category::Clinic);
    let mut engine = AdditiveModel::default();
    let first = render(&params, &mut engine).unwrap();
    let second = render(&params, &mut engine).unwrap();
    assert_eq!(first, second);

    let other = render_default(&params.with_seed(SeedSource::Fixed(1))).unwrap();
    assert_ne!(first.raw_tail, other.raw_tail);
}

#[test]
fn engine_fits_a_built_request_directly() {
    let today = ymd(2023, 6, 30);
    let generator = SyntheticSeriesGenerator::new(ymd(2022, 1, 1), Variant::ByCategory);
    let series = generator
        .generate(today, &mut SeedSource::Fixed(11).rng())
        .unwrap();
    let horizon = Horizon::new(1).unwrap();
    let request = build_request(&series, Category::Ward, horizon).unwrap();

    let mut engine = AdditiveModel::default();
    assert!(engine.predict(&request.future).is_err());
    engine.fit(&request.history).unwrap();
    let result = engine.predict(&request.future).unwrap();

    assert_eq!(result.history_len, request.history_len());
    assert_eq!(result.rows.len(), request.future_len());
    assert_eq!(result.future().len(), horizon.days() as usize);
    for (row, &ds) in result.rows.iter().zip(&request.future) {
        assert_eq!(row.ds, ds);
        assert!(row.yhat_lower <= row.yhat && row.yhat <= row.yhat_upper);
    }
}

#[test]
fn summary_json_round_trips() {
    let params = two_year_params(Variant::ByCategory).with_category(Category::Emergency);
    let vm = render_default(&params).unwrap();
    let summary = vm.summary();

    let text = serde_json::to_string_pretty(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["title"], summary.title);
    assert_eq!(parsed["data_heading"], summary.data_heading);
    assert_eq!(parsed["horizon_years"], u64::from(params.horizon.years()));
    assert_eq!(parsed["history_end"], "2024-01-31");
    let mean = parsed["history_mean"].as_f64().unwrap();
    assert!((mean - summary.history_mean).abs() < 1e-9);
    assert_eq!(parsed["history_days"].as_u64(), Some(summary.history_days as u64));
    assert_eq!(
        parsed["forecast_tail"].as_array().map(Vec::len),
        Some(vm.forecast_tail.len())
    );
}
