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

use anyhow::{anyhow, Result};

pub const DEFAULT_BASE_URL: &str = "okta.com";

/// Resolved settings needed to reach an Okta organization
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub org_url: String,
    pub api_token: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("org_url", &self.org_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    /// Resolve the configuration, each missing value being looked up with `env`
    pub fn resolve<F>(
        org_name: Option<&str>,
        base_url: Option<&str>,
        api_token: Option<&str>,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |value: Option<&str>, var: &str| {
            value
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
                .or_else(|| env(var).filter(|value| !value.is_empty()))
        };

        let org_name = lookup(org_name, "OKTA_ORG_NAME").ok_or_else(|| {
            anyhow!("`org_name` must be set, either in the provider block or with OKTA_ORG_NAME")
        })?;
        let base_url = lookup(base_url, "OKTA_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let api_token = lookup(api_token, "OKTA_API_TOKEN").ok_or_else(|| {
            anyhow!("`api_token` must be set, either in the provider block or with OKTA_API_TOKEN")
        })?;

        Ok(Self {
            org_url: format!(
                "https://{}.{}",
                org_name,
                base_url.trim_start_matches('.').trim_end_matches('/')
            ),
            api_token,
        })
    }

    /// Reach an explicit endpoint instead of `https://{org_name}.{base_url}`
    #[cfg(test)]
    pub fn with_endpoint<U: Into<String>, T: Into<String>>(org_url: U, api_token: T) -> Self {
        Self {
            org_url: org_url.into().trim_end_matches('/').to_owned(),
            api_token: api_token.into(),
        }
    }
}
