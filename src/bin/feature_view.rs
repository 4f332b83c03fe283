//! Line-oriented front end for the view controller.
//!
//! Reads one command per line from stdin and routes it through
//! `ViewController::handle`, exactly as button clicks would be routed.
use keypoint_hull::controller::ControllerOptions;
use keypoint_hull::ui::{LineDialog, ScriptedDialog, UiEvent};
use keypoint_hull::ViewController;
use log::warn;
use std::env;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  load [path]    open an image (prompts when no path is given)
  save [path]    save the current result (prompts when no path is given)
  toggle         switch between key point and bounding box view
  slider <n>     set the number of keypoints kept (10..=1000)
  status         print the window state
  help           print this text
  quit           leave";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let options = ControllerOptions {
        live_recompute: env::args().skip(1).any(|a| a == "--live"),
        ..Default::default()
    };
    let mut controller = ViewController::new(options);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_status(&controller);
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to write prompt: {e}"))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read command: {e}"))?;
        if read == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();
        match command {
            "load" => {
                dispatch(&mut controller, UiEvent::LoadClicked, arg, &mut input);
                println!("{}", controller.widgets().execution_time_label);
            }
            "save" => dispatch(&mut controller, UiEvent::SaveClicked, arg, &mut input),
            "toggle" => {
                controller.handle(UiEvent::ToggleViewClicked, &mut ScriptedDialog::new());
                println!("[{}]", controller.widgets().toggle_button);
            }
            "slider" => match arg.map(str::parse::<i32>) {
                Some(Ok(value)) => {
                    controller.handle(UiEvent::SliderChanged(value), &mut ScriptedDialog::new());
                    println!("{}", controller.widgets().keypoints_label);
                }
                _ => warn!("slider expects an integer value"),
            },
            "status" => print_status(&controller),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => warn!("Unknown command {other:?}, try `help`"),
        }
    }
    Ok(())
}

/// Use the path given on the command line, or prompt for one on stdin.
fn dispatch<R: BufRead>(
    controller: &mut ViewController,
    event: UiEvent,
    path: Option<&str>,
    input: &mut R,
) {
    match path {
        Some(path) => controller.handle(event, &mut ScriptedDialog::with_paths([path])),
        None => controller.handle(event, &mut LineDialog::new(input, io::stdout())),
    }
}

fn print_status(controller: &ViewController) {
    for line in controller.widgets().status_lines() {
        println!("{line}");
    }
}
