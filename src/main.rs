use std::process::ExitCode;

use ascii_cam::app::{self, AppError, LoopExit};
use ascii_cam::camera::CameraCapture;
use ascii_cam::cli::{self, Args, Command};
use ascii_cam::config::{self, Config};
use clap::Parser;

fn main() -> ExitCode {
    // Logs go to stderr; the default keeps them out of the redrawn frame
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, AppError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let mut stdout = std::io::stdout();

    match args.command {
        Some(Command::ListCameras) => {
            cli::list_cameras(&mut stdout)?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, args, &config_path, &mut stdout)?;
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    let config = Config::load(Some(&config_path))?;
    let settings = args.settings(&config)?;
    log::info!("starting with {:?}", settings);

    let stop = app::install_stop_handler()?;
    let summary = app::run_session(&settings, |s| CameraCapture::open(s.clone()), stdout, &stop)?;

    Ok(match summary.exit {
        LoopExit::Interrupted => ExitCode::SUCCESS,
        LoopExit::ReadFailed(_) => ExitCode::FAILURE,
    })
}

/// Print an error to stderr, with troubleshooting steps for camera failures.
fn report(err: &AppError) {
    eprintln!("Error: {}", err);
    if let AppError::Camera(camera_err) = err {
        if !camera_err.is_open_failure() {
            return;
        }
        eprintln!();
        eprintln!("Troubleshooting:");
        for (i, hint) in app::troubleshooting_hints(camera_err).iter().enumerate() {
            eprintln!("{}. {}", i + 1, hint);
        }
    }
}
