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

use thiserror::Error;

/// Error types for client operations
///
/// Every request goes through the same execution path, so callers only ever
/// see these variants; `reqwest` failures are wrapped in `Transport`.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Network failure, connection refused or request timeout
	#[error("Transport error: {0}")]
	Transport(#[from] reqwest::Error),
	/// Server answered with a non-success status
	#[error("API error: HTTP {status}: {body}")]
	Api { status: u16, body: String },
	/// Response body was not the JSON object the operation expects
	#[error("Failed to parse response: {0}")]
	Parse(#[source] serde_json::Error),
	/// Request body could not be encoded as JSON
	#[error("Serialization error: {0}")]
	Serialization(#[source] serde_json::Error),
	#[error("Invalid header value: {0}")]
	InvalidHeader(String),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Configuration error: {0}")]
	Config(String),
}

impl ClientError {
	/// HTTP status reported by the server, if the failure came from one
	pub fn status(&self) -> Option<u16> {
		match self {
			ClientError::Api { status, .. } => Some(*status),
			ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
			_ => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}

	pub fn is_timeout(&self) -> bool {
		matches!(self, ClientError::Transport(err) if err.is_timeout())
	}
}

impl From<config::ConfigError> for ClientError {
	fn from(err: config::ConfigError) -> Self {
		ClientError::Config(err.to_string())
	}
}

impl From<url::ParseError> for ClientError {
	fn from(err: url::ParseError) -> Self {
		ClientError::Config(format!("invalid base URL: {}", err))
	}
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
