//! Webcam Rock-Paper-Scissors.
//!
//! Options: --camera, --python, --script, --detection-confidence,
//! --tracking-confidence, --seed, --verbose
use clap::Parser;
use roshambo::args::Args;
use roshambo::device::*;
use roshambo::engine::Engine;
use roshambo::round::Random;

fn main() {
    let args = Args::parse();
    roshambo::log(args.verbose);
    match play(&args) {
        Ok(summary) => log::info!("[roshambo] {}", summary),
        Err(e) => {
            log::error!("{:#}", e);
            log::error!(
                "Make sure OpenCV is installed and the detector has its packages: pip install mediapipe numpy"
            );
            std::process::exit(1);
        }
    }
}

fn play(args: &Args) -> anyhow::Result<roshambo::engine::Summary> {
    let camera = Webcam::open(args.camera)?;
    let detector = Sidecar::spawn(&args.sidecar())?;
    let screen = Window::open(roshambo::WINDOW_TITLE)?;
    log::info!("[roshambo] show your hand to the camera");
    log::info!("[roshambo]   Rock: make a fist");
    log::info!("[roshambo]   Paper: show an open palm");
    log::info!("[roshambo]   Scissors: show a peace sign");
    log::info!("[roshambo] press SPACE to start a round, 'q' to quit");
    Engine::new(camera, detector, screen, Random::from(args.seed)).run()
}
