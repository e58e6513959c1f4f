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

use serde::Serialize;

use crate::auth::AuthContext;
use crate::client::AgreementClient;
use crate::endpoint::{Endpoint, USERS};
use crate::error::ClientResult;
use crate::types::ApiObject;

impl AgreementClient {
	/// Create a user in the account; the response carries the new `userId`
	pub async fn create_user<B: Serialize + ?Sized>(
		&self,
		auth: &AuthContext,
		body: &B,
	) -> ClientResult<ApiObject> {
		self.post_json(Endpoint::collection(USERS), auth, body)
			.await
	}

	pub async fn list_users(&self, auth: &AuthContext) -> ClientResult<ApiObject> {
		self.get_json(Endpoint::collection(USERS), auth).await
	}
}
