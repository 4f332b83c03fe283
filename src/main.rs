use keypoint_hull::config::load_config;
use keypoint_hull::image::io::write_json_file;
use keypoint_hull::ui::ScriptedDialog;
use keypoint_hull::ViewController;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut controller = ViewController::new(config.controller_options());
    controller.set_keypoint_budget(config.keypoints);
    if controller.view_mode() != config.view {
        controller.toggle_view();
    }

    let mut dialog = ScriptedDialog::with_paths([config.input.clone()]);
    let summary = controller.load(&mut dialog).map_err(|e| e.to_string())?;
    println!(
        "{}x{} ({} ch): kept {} of {} keypoints",
        summary.width,
        summary.height,
        summary.channels,
        summary.keypoints_retained,
        summary.keypoints_detected
    );
    println!("{}", controller.widgets().execution_time_label);

    let written = controller
        .save_to(&config.output)
        .map_err(|e| e.to_string())?;
    println!("Saved {}", written.display());

    if let Some(report_path) = &config.report_json {
        let report = controller
            .report()
            .ok_or("No image loaded, nothing to report")?;
        write_json_file(report_path, &report)?;
        info!("Report written to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: keypoint-hull <config.json>".to_string()
}
