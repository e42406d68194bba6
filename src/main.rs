mod app;
mod browser_time;
mod clock_view;
mod prefs;
mod theme_runtime;
mod ticker;

fn main() {
    console_error_panic_hook::set_once();
    theme_runtime::install_host_listener();
    yew::Renderer::<app::App>::new().render();
}
