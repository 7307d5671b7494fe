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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{Value, ValueEmpty, ValueString};
use tf_provider::{map, AttributePath, Diagnostics, Provider};

use crate::{
    brand::{BrandDataSource, BrandResource, BrandsDataSource},
    okta::{config::ClientConfig, http::OktaClient, ApiHandle},
};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct OktaProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub org_name: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub base_url: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub api_token: ValueString<'a>,
}

impl<'a> OktaProviderConfig<'a> {
    fn resolve(&self) -> anyhow::Result<ClientConfig> {
        ClientConfig::resolve(
            self.org_name.as_deref_option(),
            self.base_url.as_deref_option(),
            self.api_token.as_deref_option(),
            |name| std::env::var(name).ok(),
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct OktaProvider {
    api: ApiHandle<OktaClient>,
}

#[async_trait]
impl Provider for OktaProvider {
    type Config<'a> = OktaProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                description: Description::plain("okta"),
                attributes: map! {
                    "org_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("The organization to manage in Okta. It can also be sourced from the OKTA_ORG_NAME environment variable."),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "base_url" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("The Okta url, e.g. `okta.com` or `oktapreview.com`. It can also be sourced from the OKTA_BASE_URL environment variable."),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "api_token" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("API Token granting privileges to Okta API. It can also be sourced from the OKTA_API_TOKEN environment variable."),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    }
                },
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        if let Value::Value(base_url) = &config.base_url {
            if base_url.contains("://") {
                diags.error(
                    "Invalid `base_url`",
                    format!("`{base_url}` must be a domain such as `okta.com`, without scheme."),
                    AttributePath::new("base_url"),
                );
            }
        }

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        _terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let client = config.resolve().and_then(OktaClient::new);
        match client {
            Ok(client) => {
                self.api.set(client).await;
                Some(())
            }
            Err(err) => {
                diags.root_error("Invalid provider configuration", err.to_string());
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::DynamicResource>>>
    {
        Some(map! {
            "brand" => BrandResource::new(self.api.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<
        std::collections::HashMap<String, Box<dyn tf_provider::DynamicDataSource>>,
    > {
        Some(map! {
            "brand"  => BrandDataSource::new(self.api.clone()),
            "brands" => BrandsDataSource::new(self.api.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn token_is_sensitive() {
        let schema = OktaProvider::default()
            .schema(&mut Diagnostics::default())
            .unwrap();
        assert!(schema.block.attributes["api_token"].sensitive);
        assert!(!schema.block.attributes["org_name"].sensitive);
    }

    #[tokio::test]
    async fn base_url_without_scheme() {
        let provider = OktaProvider::default();
        let config = OktaProviderConfig {
            base_url: Value::Value(Cow::Borrowed("https://okta.com")),
            ..Default::default()
        };
        let mut diags = Diagnostics::default();
        assert!(provider.validate(&mut diags, config).await.is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn configure_shares_client() {
        let provider = OktaProvider::default();
        let config = OktaProviderConfig {
            org_name: Value::Value(Cow::Borrowed("acme")),
            base_url: Value::Value(Cow::Borrowed("oktapreview.com")),
            api_token: Value::Value(Cow::Borrowed("token")),
        };
        let mut diags = Diagnostics::default();

        let resources = provider.get_resources(&mut diags).unwrap();
        assert!(resources.contains_key("brand"));
        let data_sources = provider.get_data_sources(&mut diags).unwrap();
        assert!(data_sources.contains_key("brands"));

        assert!(provider
            .configure(&mut diags, "1.9.0".to_owned(), config)
            .await
            .is_some());
        assert!(diags.errors.is_empty(), "{diags:?}");
        assert!(provider.api.get(&mut diags).await.is_some());
    }
}
