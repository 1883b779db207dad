#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> blogview::backend::error::BackendResult<()> {
    use blogview::backend::config::BlogConfig;
    use log::LevelFilter;

    if std::env::args().collect::<Vec<_>>().get(1) == Some(&"--print-config".to_string()) {
        println!("{}", doku::to_toml::<BlogConfig>());
        std::process::exit(0);
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("blogview", LevelFilter::Info)
        .init();

    let config = BlogConfig::read()?;
    blogview::backend::start(config, None, None).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    use blogview::frontend::app::App;

    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
