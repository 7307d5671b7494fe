// This file is part of the terraform-provider-okta project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
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

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tf_provider::Diagnostics;
use tokio::sync::{RwLock, RwLockReadGuard};

pub mod config;
pub mod http;

#[cfg(test)]
pub mod fake;

/// Tri-state flag: the API may omit the field entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum OptionalFlag {
    #[default]
    Absent,
    Present(bool),
}

impl From<Option<bool>> for OptionalFlag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(OptionalFlag::Absent, OptionalFlag::Present)
    }
}

impl From<OptionalFlag> for Option<bool> {
    fn from(value: OptionalFlag) -> Self {
        match value {
            OptionalFlag::Absent => None,
            OptionalFlag::Present(flag) => Some(flag),
        }
    }
}

/// Brand as returned by the Okta API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_privacy_policy_url: String,
    #[serde(default)]
    pub remove_powered_by_okta: OptionalFlag,
    #[serde(rename = "_links", default)]
    pub links: serde_json::Value,
}

/// Body of a brand update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agree_to_custom_privacy_policy: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_privacy_policy_url: String,
    pub remove_powered_by_okta: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[async_trait]
pub trait BrandApi: Send + Sync + 'static {
    /// List all the brands of the organization
    async fn list_brands(&self) -> Result<Vec<Brand>>;

    /// Get a single brand, `None` if it does not exist
    async fn get_brand(&self, brand_id: &str) -> Result<Option<Brand>>;

    /// Replace the settable fields of a brand
    async fn update_brand(&self, brand_id: &str, request: &BrandRequest) -> Result<Brand>;
}

/// Client shared between the provider and its resources.
/// It is only available once the provider has been configured.
#[derive(Debug)]
pub struct ApiHandle<T> {
    inner: Arc<RwLock<Option<T>>>,
}

impl<T> Clone for ApiHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for ApiHandle<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }
}

impl<T: BrandApi> ApiHandle<T> {
    #[cfg(test)]
    pub fn new(api: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(api))),
        }
    }

    pub async fn set(&self, api: T) {
        *self.inner.write().await = Some(api);
    }

    pub async fn get(&self, diags: &mut Diagnostics) -> Option<RwLockReadGuard<'_, T>> {
        match RwLockReadGuard::try_map(self.inner.read().await, Option::as_ref) {
            Ok(api) => Some(api),
            Err(_) => {
                diags.root_error(
                    "Provider is not configured",
                    "The Okta client is used before the provider block has been configured.",
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn brand_fields_are_optional() {
        let brand: Brand = serde_json::from_value(json!({
            "id": "bnd1",
            "customPrivacyPolicyUrl": null,
        }))
        .unwrap();

        assert_eq!(brand.id, "bnd1");
        assert_eq!(brand.custom_privacy_policy_url, "");
        assert_eq!(brand.remove_powered_by_okta, OptionalFlag::Absent);
        assert_eq!(brand.links, serde_json::Value::Null);
    }

    #[test]
    fn brand_keeps_explicit_false() {
        let brand: Brand = serde_json::from_value(json!({
            "id": "bnd1",
            "customPrivacyPolicyUrl": "https://example.com/policy",
            "removePoweredByOkta": false,
            "_links": {"self": {"href": "https://example.okta.com/api/v1/brands/bnd1"}},
        }))
        .unwrap();

        assert_eq!(brand.custom_privacy_policy_url, "https://example.com/policy");
        assert_eq!(brand.remove_powered_by_okta, OptionalFlag::Present(false));
        assert!(brand.links["self"]["href"].is_string());
    }

    #[test]
    fn request_omits_unset_fields() {
        let request = BrandRequest {
            remove_powered_by_okta: true,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"removePoweredByOkta": true})
        );

        let request = BrandRequest {
            agree_to_custom_privacy_policy: Some(true),
            custom_privacy_policy_url: "https://example.com/policy".to_owned(),
            remove_powered_by_okta: false,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "agreeToCustomPrivacyPolicy": true,
                "customPrivacyPolicyUrl": "https://example.com/policy",
                "removePoweredByOkta": false,
            })
        );
    }

    #[tokio::test]
    async fn handle_requires_configuration() {
        let handle = ApiHandle::<fake::FakeBrandApi>::default();
        let mut diags = Diagnostics::default();
        assert!(handle.get(&mut diags).await.is_none());
        assert_eq!(diags.errors.len(), 1);

        handle.set(fake::FakeBrandApi::default()).await;
        let mut diags = Diagnostics::default();
        assert!(handle.get(&mut diags).await.is_some());
        assert!(diags.errors.is_empty());
    }
}
