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

//! EchoSign SDK - Client library for the Adobe EchoSign REST API
//!
//! This crate provides a typed client for agreements, widgets and users,
//! authentication header handling, and shared request/response types.
//!
//! Each call maps to exactly one HTTP request:
//! - No retries or backoff
//! - No background threads (outside the optional blocking wrapper)
//! - No caching
//!
//! # Example
//!
//! ```rust,ignore
//! use echosign_sdk::{AgreementClient, AuthContext, ClientConfig};
//!
//! let client = AgreementClient::new(ClientConfig::from_env()?)?;
//! let auth = AuthContext::new(token).with_user_email("sender@example.com");
//! let agreement = client.get_agreement(&auth, "3AAABLblqZhA").await?;
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;
mod users;
mod widgets;

pub use auth::AuthContext;
pub use client::{AgreementClient, SyncAgreementClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::*;
