#[cfg(not(target_arch = "wasm32"))]
use anyhow::Result;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    use chart_request::core::config::Config;
    use chart_request::core::error::GENERATING;
    use chart_request::services::api::HttpChartApi;
    use chart_request::services::select::run_selection;
    use chart_request::services::session::ChartSession;
    use indicatif::ProgressBar;
    use std::time::Duration;

    env_logger::init();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {:#}", e);
            return Err(e);
        }
    };

    let api = HttpChartApi::new(&config)?;
    let mut session = ChartSession::new(api, config.default_role.clone());

    // 1. Reference data
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Loading scenarios and roles...");
    let loaded = session.init().await;
    spinner.finish_and_clear();

    if !loaded {
        println!("{}", session.output());
        return Ok(());
    }

    // 2. Selection
    let selection = run_selection(
        &config,
        &session.scenario_options(),
        &session.role_options(),
    )?;

    // 3. Generate
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(GENERATING);
    let output = session
        .generate(selection.scenario_id.as_deref(), selection.roles)
        .await
        .to_string();
    spinner.finish_and_clear();

    println!("{}", output);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
