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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Decoded JSON object returned by metadata operations
pub type ApiObject = serde_json::Map<String, serde_json::Value>;

/// Content format of supporting documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
	/// Documents as originally uploaded
	Original,
	/// Documents converted to PDF
	ConvertedPdf,
}

impl DocumentFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			DocumentFormat::Original => "ORIGINAL",
			DocumentFormat::ConvertedPdf => "CONVERTED_PDF",
		}
	}
}

impl fmt::Display for DocumentFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DocumentFormat {
	type Err = ClientError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ORIGINAL" => Ok(DocumentFormat::Original),
			"CONVERTED_PDF" => Ok(DocumentFormat::ConvertedPdf),
			other => Err(ClientError::InvalidArgument(format!(
				"unsupported document format {:?}, expected ORIGINAL or CONVERTED_PDF",
				other
			))),
		}
	}
}

/// Query options for the combined document download
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedDocumentOptions {
	/// Agreement version; the latest version when unset
	pub version_id: Option<String>,
	/// Participant whose view of the agreement is downloaded
	pub participant_email: Option<String>,
	pub attach_supporting_documents: bool,
	pub audit_report: bool,
}

/// Query options for listing agreement documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentsQuery {
	pub recipient_email: Option<String>,
	pub format: Option<DocumentFormat>,
	/// Agreement version; the latest version when unset
	pub version_id: Option<String>,
}
