use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, error::InfraError, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let postgres_arc = Arc::new(postgres_persistence(&config).await?);

    let waitlist_repo_arc = postgres_arc.clone() as Arc<dyn WaitlistRepo>;
    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mrmorris_web=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
