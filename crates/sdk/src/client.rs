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

use reqwest::{Client as ReqwestClient, Method, header::CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::endpoint::{AGREEMENTS, Endpoint};
use crate::error::{ClientError, ClientResult};
use crate::types::{ApiObject, CombinedDocumentOptions, DocumentsQuery};

/// Client for the EchoSign agreements API
///
/// Every operation issues exactly one HTTP request. The client holds no
/// mutable state and can be cloned or shared freely between tasks; clones
/// share the underlying connection pool. Dropping a returned future aborts
/// the request in flight.
#[derive(Debug, Clone)]
pub struct AgreementClient {
	base_url: Url,
	client: ReqwestClient,
	timeout: Duration,
}

impl AgreementClient {
	/// Create a new client from configuration
	pub fn new(config: ClientConfig) -> ClientResult<Self> {
		if config.timeout_ms == 0 {
			return Err(ClientError::Config(
				"timeout_ms must be greater than zero".to_string(),
			));
		}

		let base_url = Url::parse(&config.base_url)?;
		if base_url.cannot_be_a_base() {
			return Err(ClientError::Config(format!(
				"base URL cannot carry a path: {}",
				config.base_url
			)));
		}

		let client = ReqwestClient::builder()
			.user_agent(config.user_agent.as_str())
			.build()
			.map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self {
			base_url,
			client,
			timeout: config.timeout(),
		})
	}

	/// Create a new client for the given base URL with default settings
	pub fn with_base_url(base_url: &str) -> ClientResult<Self> {
		Self::new(ClientConfig::with_base_url(base_url))
	}

	/// Copy of this client using a different per-request timeout
	pub fn with_timeout(&self, timeout: Duration) -> Self {
		Self {
			timeout,
			..self.clone()
		}
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Create an agreement
	///
	/// `body` is sent as-is; it is expected to follow the API's
	/// `AgreementCreationInfo` shape (`documentCreationInfo`, `options`, ...).
	pub async fn create_agreement<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		let endpoint = Endpoint::collection(AGREEMENTS);
		self.post_json(endpoint, auth, body).await
	}

	/// List agreements visible to the authenticated user
	pub async fn list_agreements(&self, auth: &AuthContext) -> ClientResult<ApiObject> {
		self.get_json(Endpoint::collection(AGREEMENTS), auth).await
	}

	/// Get agreement details
	pub async fn get_agreement(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<ApiObject> {
		self.get_json(agreement(agreement_id)?, auth).await
	}

	/// Get the URLs of the e-sign pages for the agreement's current signers
	pub async fn get_signing_urls(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<ApiObject> {
		let endpoint = agreement(agreement_id)?.segment("signingUrls");
		self.get_json(endpoint, auth).await
	}

	/// Download all agreement documents merged into a single PDF
	pub async fn get_combined_pdf(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		options: &CombinedDocumentOptions,
	) -> ClientResult<Vec<u8>> {
		let endpoint = agreement(agreement_id)?
			.segment("combinedDocument")
			.query_opt("versionId", options.version_id.as_deref())
			.query_opt("participantEmail", options.participant_email.as_deref())
			.query("attachSupportingDocuments", options.attach_supporting_documents)
			.query("auditReport", options.audit_report);
		self.get_bytes(endpoint, auth).await
	}

	/// Download form field data entered by signers, as CSV
	pub async fn get_form_data(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<Vec<u8>> {
		let endpoint = agreement(agreement_id)?.segment("formData");
		self.get_bytes(endpoint, auth).await
	}

	/// Download a single document of the agreement
	pub async fn get_document_file(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		document_id: &str,
	) -> ClientResult<Vec<u8>> {
		let endpoint = agreement(agreement_id)?
			.segment("documents")
			.id(document_id)?;
		self.get_bytes(endpoint, auth).await
	}

	/// Download the audit trail PDF
	pub async fn get_audit_trail_pdf(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<Vec<u8>> {
		let endpoint = agreement(agreement_id)?.segment("auditTrail");
		self.get_bytes(endpoint, auth).await
	}

	/// List the documents and supporting documents of an agreement
	pub async fn list_documents(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		query: &DocumentsQuery,
	) -> ClientResult<ApiObject> {
		let endpoint = agreement(agreement_id)?
			.segment("documents")
			.query_opt("versionId", query.version_id.as_deref())
			.query_opt("participantEmail", query.recipient_email.as_deref())
			.query_opt("supportingDocumentContentFormat", query.format);
		self.get_json(endpoint, auth).await
	}

	/// Update agreement status, e.g. `{"value": "CANCEL", "comment": "..."}`
	pub async fn update_agreement_status<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		body: &B,
	) -> ClientResult<ApiObject> {
		let endpoint = agreement(agreement_id)?.segment("status");
		self.put_json(endpoint, auth, body).await
	}

	pub(crate) async fn get_json(
		&self,
		endpoint: Endpoint,
		auth: &AuthContext,
	) -> ClientResult<ApiObject> {
		let body = self.execute(Method::GET, endpoint, auth, None).await?;
		decode_object(&body)
	}

	pub(crate) async fn get_bytes(
		&self,
		endpoint: Endpoint,
		auth: &AuthContext,
	) -> ClientResult<Vec<u8>> {
		self.execute(Method::GET, endpoint, auth, None).await
	}

	pub(crate) async fn post_json<B: Serialize + ?Sized>(
		&self,
		endpoint: Endpoint,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		let payload = encode_body(body)?;
		let body = self
			.execute(Method::POST, endpoint, auth, Some(payload))
			.await?;
		decode_object(&body)
	}

	pub(crate) async fn put_json<B: Serialize + ?Sized>(
		&self,
		endpoint: Endpoint,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		let payload = encode_body(body)?;
		let body = self
			.execute(Method::PUT, endpoint, auth, Some(payload))
			.await?;
		decode_object(&body)
	}

	/// Issue one request and return the raw body of a successful response
	///
	/// All operations go through here so that transport failures and
	/// non-success statuses are reported the same way everywhere.
	async fn execute(
		&self,
		method: Method,
		endpoint: Endpoint,
		auth: &AuthContext,
		payload: Option<Vec<u8>>,
	) -> ClientResult<Vec<u8>> {
		let url = endpoint.resolve(&self.base_url);
		let headers = auth.headers()?;
		tracing::debug!(method = %method, url = %url, "EchoSign request");

		let mut request = self
			.client
			.request(method.clone(), url.clone())
			.headers(headers)
			.timeout(self.timeout);
		if let Some(payload) = payload {
			request = request
				.header(CONTENT_TYPE, "application/json")
				.body(payload);
		}

		let response = request.send().await.map_err(|e| {
			tracing::warn!(method = %method, url = %url, error = %e, "EchoSign request failed");
			ClientError::Transport(e)
		})?;

		let status = response.status();
		if !status.is_success() {
			let body = match response.text().await {
				Ok(body) => body,
				Err(e) => {
					tracing::warn!(url = %url, error = %e, "Failed to read error response body");
					format!("<unreadable response body: {}>", e)
				}
			};
			tracing::warn!(
				method = %method,
				url = %url,
				status = status.as_u16(),
				"EchoSign request rejected"
			);
			return Err(ClientError::Api {
				status: status.as_u16(),
				body,
			});
		}

		let body = response.bytes().await?;
		tracing::debug!(status = status.as_u16(), bytes = body.len(), "EchoSign response");
		Ok(body.to_vec())
	}
}

fn agreement(agreement_id: &str) -> ClientResult<Endpoint> {
	Endpoint::collection(AGREEMENTS).id(agreement_id)
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> ClientResult<Vec<u8>> {
	serde_json::to_vec(body).map_err(ClientError::Serialization)
}

fn decode_object(body: &[u8]) -> ClientResult<ApiObject> {
	serde_json::from_slice(body).map_err(|e| {
		tracing::warn!(
			body = %String::from_utf8_lossy(body),
			error = %e,
			"Failed to parse response"
		);
		ClientError::Parse(e)
	})
}

/// Synchronous client wrapper
///
/// This wraps the async client and runs it in a tokio runtime.
/// For new code, prefer using the async `AgreementClient` directly.
pub struct SyncAgreementClient {
	client: AgreementClient,
	runtime: tokio::runtime::Runtime,
}

impl SyncAgreementClient {
	/// Create a new synchronous client
	pub fn new(config: ClientConfig) -> ClientResult<Self> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| ClientError::Config(format!("Failed to create tokio runtime: {}", e)))?;
		Ok(Self {
			client: AgreementClient::new(config)?,
			runtime,
		})
	}

	/// The wrapped async client
	pub fn inner(&self) -> &AgreementClient {
		&self.client
	}

	pub fn create_agreement<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		self.runtime.block_on(self.client.create_agreement(auth, body))
	}

	pub fn list_agreements(&self, auth: &AuthContext) -> ClientResult<ApiObject> {
		self.runtime.block_on(self.client.list_agreements(auth))
	}

	pub fn get_agreement(&self, auth: &AuthContext, agreement_id: &str) -> ClientResult<ApiObject> {
		self.runtime
			.block_on(self.client.get_agreement(auth, agreement_id))
	}

	pub fn get_signing_urls(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<ApiObject> {
		self.runtime
			.block_on(self.client.get_signing_urls(auth, agreement_id))
	}

	pub fn get_combined_pdf(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		options: &CombinedDocumentOptions,
	) -> ClientResult<Vec<u8>> {
		self.runtime
			.block_on(self.client.get_combined_pdf(auth, agreement_id, options))
	}

	pub fn get_form_data(&self, auth: &AuthContext, agreement_id: &str) -> ClientResult<Vec<u8>> {
		self.runtime
			.block_on(self.client.get_form_data(auth, agreement_id))
	}

	pub fn get_document_file(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		document_id: &str,
	) -> ClientResult<Vec<u8>> {
		self.runtime.block_on(
			self.client
				.get_document_file(auth, agreement_id, document_id),
		)
	}

	pub fn get_audit_trail_pdf(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
	) -> ClientResult<Vec<u8>> {
		self.runtime
			.block_on(self.client.get_audit_trail_pdf(auth, agreement_id))
	}

	pub fn list_documents(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		query: &DocumentsQuery,
	) -> ClientResult<ApiObject> {
		self.runtime
			.block_on(self.client.list_documents(auth, agreement_id, query))
	}

	pub fn update_agreement_status<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		agreement_id: &str,
		body: &B,
	) -> ClientResult<ApiObject> {
		self.runtime.block_on(
			self.client
				.update_agreement_status(auth, agreement_id, body),
		)
	}
}
