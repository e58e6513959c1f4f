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

//! Request authentication
//!
//! EchoSign authenticates every call with an OAuth access token sent in the
//! `Access-Token` header. Calls made on behalf of a specific user of the
//! account additionally identify that user with `X-User-Id` or
//! `X-User-Email`. Token acquisition itself happens elsewhere; this module
//! only turns an already issued token into headers.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{ClientError, ClientResult};

/// Header carrying the OAuth access token
pub const ACCESS_TOKEN_HEADER: &str = "access-token";
/// Header naming the acting user by ID
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header naming the acting user by email
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Authentication materials for a single request
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
	pub token: String,
	pub user_id: Option<String>,
	pub user_email: Option<String>,
}

impl AuthContext {
	/// Token-only authentication
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
			user_id: None,
			user_email: None,
		}
	}

	/// Act on behalf of the user with the given EchoSign user ID
	pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
		self.user_id = Some(user_id.into());
		self
	}

	/// Act on behalf of the user with the given email address
	pub fn with_user_email(mut self, user_email: impl Into<String>) -> Self {
		self.user_email = Some(user_email.into());
		self
	}

	/// Build the header set for this context
	///
	/// `Access-Token` is always present. Each user header is present only if
	/// the matching field was set by the caller.
	pub fn headers(&self) -> ClientResult<HeaderMap> {
		let mut headers = HeaderMap::new();

		insert(&mut headers, ACCESS_TOKEN_HEADER, &self.token)?;
		if let Some(user_id) = &self.user_id {
			insert(&mut headers, USER_ID_HEADER, user_id)?;
		}
		if let Some(user_email) = &self.user_email {
			insert(&mut headers, USER_EMAIL_HEADER, user_email)?;
		}

		Ok(headers)
	}
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> ClientResult<()> {
	let mut value = HeaderValue::from_str(value)
		.map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
	if name == ACCESS_TOKEN_HEADER {
		value.set_sensitive(true);
	}
	headers.insert(HeaderName::from_static(name), value);
	Ok(())
}

// Tokens must never end up in logs.
impl fmt::Debug for AuthContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AuthContext")
			.field("token", &"<redacted>")
			.field("user_id", &self.user_id)
			.field("user_email", &self.user_email)
			.finish()
	}
}
