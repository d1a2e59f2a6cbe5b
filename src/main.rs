#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use admission_forecast::{Cli, PERSISTENCE, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {clap::Parser, eframe::NativeOptions, std::path::PathBuf};

#[cfg(target_arch = "wasm32")]
use {
    admission_forecast::Variant,
    wasm_bindgen::{JsCast, prelude::*},
};

/// (everything else, this crate): quiet in release, our Info logs in debug builds.
fn log_levels() -> (log::LevelFilter, log::LevelFilter) {
    if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_log() {
    let (global_level, crate_level) = log_levels();
    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for("admission_forecast", crate_level)
        .chain(fern::Output::call(|record| {
            let msg = format!("[{}] {}", record.target(), record.args());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

/// Browser entry point: the aggregate dashboard on `#the_canvas_id`, entropy-seeded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("the_canvas_id"))
        .ok_or("no element with id 'the_canvas_id' in the page")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id is not a canvas")?;

    let args = Cli {
        variant: Variant::Aggregate,
        seed: None,
        start_date: None,
    };
    log::info!("{} starting in the browser", PERSISTENCE.app_name);

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, crate_level) = log_levels();
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("admission_forecast"), crate_level)
        .init();

    let args = Cli::parse();
    log::info!("{:?}", args);

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title(format!("{} ({})", PERSISTENCE.app_name, args.variant)),
        ..Default::default()
    };

    eframe::run_native(
        PERSISTENCE.app_name,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
