//! Prints the demonstration roster report.

use std::process::ExitCode;

use tracing::{Level, error};

use employee_roster::config::RosterConfig;
use employee_roster::ids::RandomHexIdGenerator;
use employee_roster::roster::sample_report;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = RosterConfig::default();
    let mut ids = RandomHexIdGenerator::new(config.id_length);

    match sample_report(&mut ids, config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to build roster report");
            ExitCode::FAILURE
        }
    }
}
