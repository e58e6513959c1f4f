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

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use echosign_sdk::{
	AgreementClient, ApiObject, AuthContext, ClientError, CombinedDocumentOptions, DocumentFormat,
	DocumentsQuery,
};

/// Command-line client for the EchoSign REST API
#[derive(Debug, Parser)]
#[command(name = "echosign", version)]
pub struct Cli {
	/// Configuration file (environment variables prefixed ECHOSIGN_ take precedence)
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Override the REST API base URL
	#[arg(long, global = true)]
	pub base_url: Option<String>,

	/// OAuth access token
	#[arg(long, global = true, env = "ECHOSIGN_ACCESS_TOKEN", hide_env_values = true)]
	pub token: String,

	/// Act on behalf of the user with this ID
	#[arg(long, global = true, conflicts_with = "user_email")]
	pub user_id: Option<String>,

	/// Act on behalf of the user with this email
	#[arg(long, global = true)]
	pub user_email: Option<String>,

	/// Write binary results to this file instead of stdout
	#[arg(long, short, global = true)]
	pub output: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

impl Cli {
	pub fn auth(&self) -> AuthContext {
		AuthContext {
			token: self.token.clone(),
			user_id: self.user_id.clone(),
			user_email: self.user_email.clone(),
		}
	}
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Create an agreement from a JSON body
	CreateAgreement {
		#[arg(long)]
		body: PathBuf,
	},
	ListAgreements,
	GetAgreement {
		agreement_id: String,
	},
	SigningUrls {
		agreement_id: String,
	},
	/// Download all documents merged into one PDF
	CombinedPdf {
		agreement_id: String,
		#[arg(long)]
		version_id: Option<String>,
		#[arg(long)]
		participant_email: Option<String>,
		#[arg(long)]
		attach_supporting_documents: bool,
		#[arg(long)]
		audit_report: bool,
	},
	/// Download signer form data as CSV
	FormData {
		agreement_id: String,
	},
	DocumentFile {
		agreement_id: String,
		document_id: String,
	},
	AuditTrail {
		agreement_id: String,
	},
	ListDocuments {
		agreement_id: String,
		#[arg(long)]
		recipient_email: Option<String>,
		/// ORIGINAL or CONVERTED_PDF
		#[arg(long, value_parser = parse_format)]
		format: Option<DocumentFormat>,
		#[arg(long)]
		version_id: Option<String>,
	},
	UpdateStatus {
		agreement_id: String,
		#[arg(long)]
		body: PathBuf,
	},
	CreateWidget {
		#[arg(long)]
		body: PathBuf,
	},
	ListWidgets,
	GetWidget {
		widget_id: String,
	},
	PersonalizeWidget {
		widget_id: String,
		#[arg(long)]
		body: PathBuf,
	},
	UpdateWidgetStatus {
		widget_id: String,
		#[arg(long)]
		body: PathBuf,
	},
	WidgetFormData {
		widget_id: String,
	},
	CreateUser {
		#[arg(long)]
		body: PathBuf,
	},
	ListUsers,
}

impl Command {
	pub fn name(&self) -> &'static str {
		match self {
			Command::CreateAgreement { .. } => "create-agreement",
			Command::ListAgreements => "list-agreements",
			Command::GetAgreement { .. } => "get-agreement",
			Command::SigningUrls { .. } => "signing-urls",
			Command::CombinedPdf { .. } => "combined-pdf",
			Command::FormData { .. } => "form-data",
			Command::DocumentFile { .. } => "document-file",
			Command::AuditTrail { .. } => "audit-trail",
			Command::ListDocuments { .. } => "list-documents",
			Command::UpdateStatus { .. } => "update-status",
			Command::CreateWidget { .. } => "create-widget",
			Command::ListWidgets => "list-widgets",
			Command::GetWidget { .. } => "get-widget",
			Command::PersonalizeWidget { .. } => "personalize-widget",
			Command::UpdateWidgetStatus { .. } => "update-widget-status",
			Command::WidgetFormData { .. } => "widget-form-data",
			Command::CreateUser { .. } => "create-user",
			Command::ListUsers => "list-users",
		}
	}
}

/// Result of a command
pub enum Output {
	Json(ApiObject),
	Bytes(Vec<u8>),
}

fn parse_format(value: &str) -> Result<DocumentFormat, String> {
	value.parse().map_err(|e: ClientError| e.to_string())
}

fn read_body(path: &Path) -> Result<serde_json::Value> {
	let raw = std::fs::read(path)
		.with_context(|| format!("Failed to read request body from {}", path.display()))?;
	serde_json::from_slice(&raw)
		.with_context(|| format!("Request body in {} is not valid JSON", path.display()))
}

/// Run one command against the API
pub async fn run(client: &AgreementClient, auth: &AuthContext, command: Command) -> Result<Output> {
	let output = match command {
		Command::CreateAgreement { body } => {
			Output::Json(client.create_agreement(auth, &read_body(&body)?).await?)
		}
		Command::ListAgreements => Output::Json(client.list_agreements(auth).await?),
		Command::GetAgreement { agreement_id } => {
			Output::Json(client.get_agreement(auth, &agreement_id).await?)
		}
		Command::SigningUrls { agreement_id } => {
			Output::Json(client.get_signing_urls(auth, &agreement_id).await?)
		}
		Command::CombinedPdf {
			agreement_id,
			version_id,
			participant_email,
			attach_supporting_documents,
			audit_report,
		} => {
			let options = CombinedDocumentOptions {
				version_id,
				participant_email,
				attach_supporting_documents,
				audit_report,
			};
			Output::Bytes(
				client
					.get_combined_pdf(auth, &agreement_id, &options)
					.await?,
			)
		}
		Command::FormData { agreement_id } => {
			Output::Bytes(client.get_form_data(auth, &agreement_id).await?)
		}
		Command::DocumentFile {
			agreement_id,
			document_id,
		} => Output::Bytes(
			client
				.get_document_file(auth, &agreement_id, &document_id)
				.await?,
		),
		Command::AuditTrail { agreement_id } => {
			Output::Bytes(client.get_audit_trail_pdf(auth, &agreement_id).await?)
		}
		Command::ListDocuments {
			agreement_id,
			recipient_email,
			format,
			version_id,
		} => {
			let query = DocumentsQuery {
				recipient_email,
				format,
				version_id,
			};
			Output::Json(client.list_documents(auth, &agreement_id, &query).await?)
		}
		Command::UpdateStatus { agreement_id, body } => Output::Json(
			client
				.update_agreement_status(auth, &agreement_id, &read_body(&body)?)
				.await?,
		),
		Command::CreateWidget { body } => {
			Output::Json(client.create_widget(auth, &read_body(&body)?).await?)
		}
		Command::ListWidgets => Output::Json(client.list_widgets(auth).await?),
		Command::GetWidget { widget_id } => Output::Json(client.get_widget(auth, &widget_id).await?),
		Command::PersonalizeWidget { widget_id, body } => Output::Json(
			client
				.personalize_widget(auth, &widget_id, &read_body(&body)?)
				.await?,
		),
		Command::UpdateWidgetStatus { widget_id, body } => Output::Json(
			client
				.update_widget_status(auth, &widget_id, &read_body(&body)?)
				.await?,
		),
		Command::WidgetFormData { widget_id } => {
			Output::Bytes(client.get_widget_form_data(auth, &widget_id).await?)
		}
		Command::CreateUser { body } => {
			Output::Json(client.create_user(auth, &read_body(&body)?).await?)
		}
		Command::ListUsers => Output::Json(client.list_users(auth).await?),
	};

	Ok(output)
}
