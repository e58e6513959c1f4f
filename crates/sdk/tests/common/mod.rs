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

//! In-process HTTP server for client tests
//!
//! An axum router whose fallback handler records every request it sees and
//! answers each one with the same canned response.

#![allow(dead_code)]

use std::{
	io,
	net::SocketAddr,
	sync::{Arc, Mutex},
	time::Duration,
};

use axum::{
	Router,
	body::{Body, Bytes},
	extract::State,
	http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
	response::{IntoResponse, Response},
};
use tokio::net::TcpListener;

/// A request as received by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: Method,
	/// Raw, still percent-encoded path
	pub path: String,
	pub query: Option<String>,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl RecordedRequest {
	/// First value of a header
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}

	/// Every value sent for a header
	pub fn header_values(&self, name: &str) -> Vec<&str> {
		self.headers
			.get_all(name)
			.iter()
			.filter_map(|v| v.to_str().ok())
			.collect()
	}

	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).expect("request body is not JSON")
	}
}

/// Canned response
#[derive(Debug, Clone)]
pub struct MockResponse {
	pub status: StatusCode,
	pub content_type: &'static str,
	pub body: Bytes,
	/// Hold the request this long before answering
	pub delay: Option<Duration>,
	/// Abort the connection after the first body chunk
	pub truncate_body: bool,
}

impl MockResponse {
	pub fn json(status: u16, body: serde_json::Value) -> Self {
		Self {
			status: StatusCode::from_u16(status).expect("invalid status code"),
			content_type: "application/json",
			body: Bytes::from(body.to_string()),
			delay: None,
			truncate_body: false,
		}
	}

	pub fn bytes(content_type: &'static str, body: &[u8]) -> Self {
		Self {
			status: StatusCode::OK,
			content_type,
			body: Bytes::copy_from_slice(body),
			delay: None,
			truncate_body: false,
		}
	}

	pub fn truncated(mut self) -> Self {
		self.truncate_body = true;
		self
	}

	pub fn delayed(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}
}

#[derive(Clone)]
struct MockState {
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
	response: MockResponse,
}

pub struct MockServer {
	addr: SocketAddr,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
	pub async fn start(response: MockResponse) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0")
			.await
			.expect("Failed to bind mock server");
		let addr = listener.local_addr().expect("Failed to read local address");
		let requests = Arc::new(Mutex::new(Vec::new()));

		let app = Router::new().fallback(record).with_state(MockState {
			requests: requests.clone(),
			response,
		});
		tokio::spawn(async move {
			axum::serve(listener, app).await.ok();
		});

		Self { addr, requests }
	}

	/// Base URL to configure the client with
	pub fn url(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	/// The only request received so far
	pub fn single_request(&self) -> RecordedRequest {
		let requests = self.requests();
		assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
		requests.into_iter().next().unwrap()
	}
}

/// URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{}", addr)
}

async fn record(
	State(state): State<MockState>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	state.requests.lock().unwrap().push(RecordedRequest {
		method,
		path: uri.path().to_string(),
		query: uri.query().map(str::to_string),
		headers,
		body,
	});

	let response = state.response;
	if let Some(delay) = response.delay {
		tokio::time::sleep(delay).await;
	}

	let body = if response.truncate_body {
		truncated_body(response.body)
	} else {
		Body::from(response.body)
	};

	(
		response.status,
		[(CONTENT_TYPE, response.content_type)],
		body,
	)
		.into_response()
}

// Streams the first half of the body, then fails so the client sees a
// broken transfer after the status line has arrived.
fn truncated_body(body: Bytes) -> Body {
	let head = body.slice(..body.len() / 2);
	let chunks = futures::stream::unfold(0u8, move |step| {
		let head = head.clone();
		async move {
			match step {
				0 => Some((Ok(head), 1)),
				1 => {
					tokio::time::sleep(Duration::from_millis(100)).await;
					Some((Err(io::Error::other("connection reset")), 2))
				}
				_ => None,
			}
		}
	});
	Body::from_stream(chunks)
}
