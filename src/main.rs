use std::io::{self, Read};
use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use slotbook_booking::{config::BookingConfig, handle_query, init_logging};
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = BookingConfig::from_env()?;
    init_logging(config.log_level)?;

    // Read the availability query from stdin
    let mut body = String::new();
    io::stdin()
        .read_to_string(&mut body)
        .wrap_err("Failed to read availability query from stdin")?;

    match handle_query(&config, &body) {
        Ok(response) => {
            info!(date = %response.date, slots = response.slots.len(), "Availability computed");
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("Availability query failed: {}", err);
            let code = err.exit_code();
            println!("{}", serde_json::to_string_pretty(&err.into_response())?);
            Ok(ExitCode::from(code as u8))
        }
    }
}
