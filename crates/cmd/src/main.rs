// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! EchoSign command-line client
//!
//! Thin front end over `echosign-sdk`: loads configuration, initializes
//! logging and runs a single API operation. JSON results are printed to
//! stdout; document downloads go to `--output` or stdout.

mod cli;
mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use echosign_sdk::{AgreementClient, ClientConfig};
use tracing::info;

use crate::cli::{Cli, Output};
use crate::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	let cli = Cli::parse();

	init_logging()?;

	let mut config = match &cli.config {
		Some(path) => ClientConfig::from_file(&path.to_string_lossy()),
		None => ClientConfig::from_env(),
	}
	.context("Failed to load client configuration")?;
	if let Some(base_url) = &cli.base_url {
		config.base_url = base_url.clone();
	}

	let client = AgreementClient::new(config).context("Failed to create EchoSign client")?;
	let auth = cli.auth();
	let command_name = cli.command.name();
	info!(target: "cli", command = command_name, base_url = %client.base_url(), "Running command");

	let output = cli::run(&client, &auth, cli.command)
		.await
		.with_context(|| format!("{} failed", command_name))?;

	match output {
		Output::Json(object) => {
			let rendered = serde_json::to_string_pretty(&object)?;
			println!("{}", rendered);
		}
		Output::Bytes(bytes) => match &cli.output {
			Some(path) => {
				std::fs::write(path, &bytes)
					.with_context(|| format!("Failed to write {}", path.display()))?;
				info!(target: "cli", path = %path.display(), bytes = bytes.len(), "Saved download");
			}
			None => {
				let mut stdout = std::io::stdout().lock();
				stdout.write_all(&bytes)?;
				stdout.flush()?;
			}
		},
	}

	Ok(())
}
