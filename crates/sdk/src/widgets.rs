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

//! Widget operations
//!
//! Widgets are reusable signing flows that can be embedded in a web page.
//! They share the agreement client's transport and header rules.

use serde::Serialize;

use crate::auth::AuthContext;
use crate::client::AgreementClient;
use crate::endpoint::{Endpoint, WIDGETS};
use crate::error::ClientResult;
use crate::types::ApiObject;

fn widget(widget_id: &str) -> ClientResult<Endpoint> {
	Endpoint::collection(WIDGETS).id(widget_id)
}

impl AgreementClient {
	/// Create a widget from a `WidgetCreationInfo`-shaped body
	pub async fn create_widget<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		self.post_json(Endpoint::collection(WIDGETS), auth, body)
			.await
	}

	pub async fn list_widgets(&self, auth: &AuthContext) -> ClientResult<ApiObject> {
		self.get_json(Endpoint::collection(WIDGETS), auth).await
	}

	pub async fn get_widget(&self, auth: &AuthContext, widget_id: &str) -> ClientResult<ApiObject> {
		self.get_json(widget(widget_id)?, auth).await
	}

	/// Bind a widget to a specific signer, e.g. `{"email": "signer@example.com"}`
	pub async fn personalize_widget<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		widget_id: &str,
		body: &B,
	) -> ClientResult<ApiObject> {
		let endpoint = widget(widget_id)?.segment("personalize");
		self.put_json(endpoint, auth, body).await
	}

	/// Enable or disable a widget, e.g. `{"value": "DISABLE", "message": "..."}`
	pub async fn update_widget_status<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		widget_id: &str,
		body: &B,
	) -> ClientResult<ApiObject> {
		let endpoint = widget(widget_id)?.segment("status");
		self.put_json(endpoint, auth, body).await
	}

	/// Download form field data collected through the widget, as CSV
	pub async fn get_widget_form_data(
		&self,
		auth: &AuthContext,
		widget_id: &str,
	) -> ClientResult<Vec<u8>> {
		self.get_bytes(widget(widget_id)?.segment("formData"), auth)
			.await
	}
}
