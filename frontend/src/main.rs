#[cfg(target_arch = "wasm32")]
fn main() {
    suraksha_frontend::logging::init();
    dioxus::launch(suraksha_frontend::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use suraksha_frontend::cli::{run, ReportArgs};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = ReportArgs::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run(args))?;
    if !outcome.is_accepted() {
        std::process::exit(1);
    }
    Ok(())
}
