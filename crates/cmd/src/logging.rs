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

//! Logging initialization for the command-line client
//!
//! # Configuration
//!
//! - `RUST_LOG`: Log level filter (default: `info`)
//!   - Can be set per module: `RUST_LOG=echosign_sdk=debug,reqwest=warn`
//!
//! - `LOG_DIR`: Root directory for log files (default: `./logs`)
//!   - Log files are created in `{LOG_DIR}/echosign/`
//!
//! - `LOG_TO_CONSOLE`: Also log to stderr (default: `false`)
//!   - Set to `true`, `1`, or `yes` to enable
//!
//! # Log File Format
//!
//! - Rotation: one file per day (UTC), e.g. `echosign.2026-01-03.log`
//! - Format: RFC 3339 UTC timestamp, log level, target, message
//!
//! Stdout is reserved for command output, so console logs go to stderr.

use std::{env, path::Path, sync::OnceLock};

use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;
use tracing_appender::{
	non_blocking,
	rolling::{self, Rotation},
};
use tracing_subscriber::{
	EnvFilter, fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt,
};

/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log directory component name
pub const LOG_COMPONENT_NAME: &str = "echosign";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

// Keeps the background writer alive so buffered lines are flushed on exit
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

fn get_log_root() -> String {
	env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string())
}

fn console_enabled(value: Option<&str>) -> bool {
	match value {
		Some(v) => matches!(v, "true" | "1" | "yes"),
		None => DEFAULT_LOG_TO_CONSOLE,
	}
}

fn setup_file_logging(log_dir: &Path) -> Result<non_blocking::NonBlocking> {
	let file_appender = rolling::RollingFileAppender::builder()
		.rotation(Rotation::DAILY)
		.filename_prefix(LOG_COMPONENT_NAME.to_string())
		.filename_suffix("log")
		.build(log_dir)
		.with_context(|| {
			format!(
				"Failed to create rolling file appender in {}",
				log_dir.display()
			)
		})?;

	let (file_writer, guard) = non_blocking(file_appender);
	LOG_GUARD.set(guard).ok();

	Ok(file_writer)
}

/// Initialize logging with file output and optional console output
pub fn init_logging() -> Result<()> {
	let log_level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

	let log_dir = Path::new(&get_log_root()).join(LOG_COMPONENT_NAME);
	std::fs::create_dir_all(&log_dir)
		.with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

	let file_writer = setup_file_logging(&log_dir)?;
	let log_to_console = console_enabled(env::var("LOG_TO_CONSOLE").ok().as_deref());

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

	let subscriber = Registry::default().with(filter).with(
		fmt::layer()
			.with_writer(file_writer)
			.with_timer(fmt::time::UtcTime::new(Rfc3339))
			.with_target(true)
			.with_ansi(false),
	);

	if log_to_console {
		subscriber
			.with(
				fmt::layer()
					.with_writer(std::io::stderr)
					.with_timer(fmt::time::UtcTime::new(Rfc3339))
					.with_target(true)
					.with_ansi(true),
			)
			.try_init()
			.context("Failed to install tracing subscriber")?;
	} else {
		subscriber
			.try_init()
			.context("Failed to install tracing subscriber")?;
	}

	tracing::debug!(
		log_dir = %log_dir.display(),
		console = log_to_console,
		"Logging initialized"
	);
	Ok(())
}
