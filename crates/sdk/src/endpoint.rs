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

//! Endpoint URL construction
//!
//! An endpoint is a resource path below the configured base URL plus an
//! ordered list of query parameters. Path segments and query values are
//! percent-encoded, so identifiers and emails are sent losslessly.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Agreements collection
pub const AGREEMENTS: &str = "agreements";
/// Widgets collection
pub const WIDGETS: &str = "widgets";
/// Users collection
pub const USERS: &str = "users";

/// A resource path with query parameters, resolved against a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	segments: Vec<String>,
	query: Vec<(&'static str, String)>,
}

impl Endpoint {
	/// Endpoint rooted at a collection, e.g. `agreements`
	pub fn collection(name: &str) -> Self {
		Self {
			segments: vec![name.to_string()],
			query: Vec::new(),
		}
	}

	/// Append a path segment
	pub fn segment(mut self, segment: impl Into<String>) -> Self {
		self.segments.push(segment.into());
		self
	}

	/// Append a resource identifier
	///
	/// Empty and dot-segment identifiers are rejected: the URL parser would
	/// fold them away and the request would hit the parent collection.
	pub fn id(self, id: &str) -> ClientResult<Self> {
		if matches!(id, "" | "." | "..") {
			return Err(ClientError::InvalidArgument(format!(
				"invalid resource identifier {:?}",
				id
			)));
		}
		Ok(self.segment(id))
	}

	/// Append a query parameter
	pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
		self.query.push((key, value.to_string()));
		self
	}

	/// Append a query parameter only if a value is present
	pub fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.query(key, value),
			None => self,
		}
	}

	/// Resolve against a base URL
	///
	/// Any path on the base URL is kept; the endpoint segments go below it.
	pub fn resolve(&self, base: &Url) -> Url {
		let mut url = base.clone();
		url.set_query(None);
		url.set_fragment(None);

		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty();
			for segment in &self.segments {
				path.push(segment);
			}
		}

		if !self.query.is_empty() {
			let mut pairs = url.query_pairs_mut();
			for (key, value) in &self.query {
				pairs.append_pair(key, value);
			}
		}

		url
	}
}
