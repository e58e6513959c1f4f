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

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default REST endpoint root (can be overridden by ECHOSIGN_BASE_URL)
pub const DEFAULT_BASE_URL: &str = "https://api.echosign.com/api/rest/v5";

/// Default request timeout in milliseconds (can be overridden by ECHOSIGN_TIMEOUT_MS)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable prefix used by [`ClientConfig::from_env`]
pub const ENV_PREFIX: &str = "ECHOSIGN";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Root of the REST API, e.g. `https://api.na1.echosign.com/api/rest/v5`
	pub base_url: String,
	/// Per-request timeout
	pub timeout_ms: u64,
	/// Value of the `User-Agent` header
	pub user_agent: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout_ms: DEFAULT_TIMEOUT_MS,
			user_agent: concat!("echosign-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

impl ClientConfig {
	/// Configuration pointing at the given base URL, defaults elsewhere
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Self::default()
		}
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file, with environment variables taking precedence
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
			.build()?;

		cfg.try_deserialize()
	}
}
