mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use config::AppPaths;

fn main() {
    let paths = AppPaths::resolve().expect("should resolve application directories");
    logging::init(&paths);
    let webview_data_dir = paths
        .ensure_webview_data_dir()
        .expect("should create WebView2 data directory")
        .to_path_buf();

    tracing::info!(
        download_dir = %paths.download_dir.display(),
        "starting csv manager"
    );

    dioxus::LaunchBuilder::desktop()
        .with_context(paths)
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("CSV Manager"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
