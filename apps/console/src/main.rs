//! Interactive console front end for the editable profile form.

#![forbid(unsafe_code)]

mod command;
mod console_app;
mod console_config;
mod console_view;
mod file_image_picker;

use std::sync::Arc;
use std::time::Duration;

use editable_profile_core::AppError;
use editable_profile_infrastructure::{HttpReferenceFetcher, JsonFileProfileStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::command::Command;
use crate::console_app::{ConsoleApp, Flow};
use crate::console_config::{ConsoleConfig, init_tracing};
use crate::console_view::ConsoleView;
use crate::file_image_picker::FileImagePicker;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load()?;
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let reference_fetcher = HttpReferenceFetcher::new(http_client, &config.reference_base_url)?;
    let profile_store = JsonFileProfileStore::new(config.store_path.clone());

    info!(
        reference_base_url = %config.reference_base_url,
        store_path = %config.store_path.display(),
        http_timeout_secs = config.http_timeout_secs,
        "editable-profile-console started"
    );

    let mut app = ConsoleApp::new(
        Arc::new(reference_fetcher),
        Arc::new(profile_store),
        Arc::new(FileImagePicker::new()),
        Arc::new(ConsoleView::new()),
    );
    app.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| AppError::Internal(format!("failed to read stdin: {error}")))?
    {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                app.report(&error);
                continue;
            }
        };

        match app.handle(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(error) => app.report(&error),
        }
    }

    info!(form_open = app.is_form_open(), "editable-profile-console stopped");
    Ok(())
}
