//! Two-player Pong on a desktop window
//!
//! Left player: Q up, A down. Right player: P up, L down. First to 11 wins.

mod app;
mod camera;
mod clock;
mod hud;
mod input;
mod mesh;
mod renderer;

fn main() {
    // info+ by default; keep GPU backends quiet unless RUST_LOG says otherwise
    let default = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = app::run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
