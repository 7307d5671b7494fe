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

use std::borrow::Cow;

use async_trait::async_trait;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{schema::Schema, AttributePath, Diagnostics, Resource};

use crate::okta::{ApiHandle, Brand, BrandApi, BrandRequest};
use crate::utils::{WithAttributes, WithNormalize, WithSchema, WithValidate};

use super::flatten::flatten_brand_diags;
use super::schema::BRAND_RESOURCE_SCHEMA;
use super::state::BrandResourceState;
use super::suppress::{pending_writes, ChangeSet, PlannedChanges};

#[derive(Debug, Default)]
pub struct BrandResource<T: BrandApi> {
    pub(super) api: ApiHandle<T>,
}

impl<T: BrandApi> BrandResource<T> {
    pub fn new(api: ApiHandle<T>) -> Self {
        Self { api }
    }

    async fn fetch(
        &self,
        diags: &mut Diagnostics,
        brand_id: &str,
        attr_path: AttributePath,
    ) -> Option<Brand> {
        let api = self.api.get(diags).await?;
        match api.get_brand(brand_id).await {
            Ok(Some(brand)) => Some(brand),
            Ok(None) => {
                diags.error(
                    "Brand not found",
                    format!("The brand `{brand_id}` does not exist in this organization."),
                    attr_path,
                );
                None
            }
            Err(err) => {
                diags.error("Failed to read brand", err.to_string(), attr_path);
                None
            }
        }
    }

    /// Point the state at an existing brand without writing anything
    async fn track<'a>(
        &self,
        diags: &mut Diagnostics,
        mut state: BrandResourceState<'a>,
        config: &BrandResourceState<'a>,
    ) -> Option<BrandResourceState<'a>> {
        let attr_path = AttributePath::new("brand_id");
        let Some(brand_id) = state.brand_id.as_deref_option().map(str::to_owned) else {
            diags.error_short("brand_id required to create the brand resource", attr_path);
            return None;
        };

        let brand = self.fetch(diags, &brand_id, attr_path.clone()).await?;
        let attrs = flatten_brand_diags(diags, &brand, AttributePath::new("links"))?;

        let configured = configured_attributes(config);
        let drifted = state.set_brand(brand.id, &attrs, &configured);
        report_drift(diags, &brand_id, drifted);

        Some(state)
    }
}

/// Guarded attributes explicitly set in the configuration
fn configured_attributes(config: &BrandResourceState<'_>) -> Vec<&'static str> {
    BRAND_RESOURCE_SCHEMA
        .iter()
        .filter(|(name, spec)| spec.diff_suppress.is_some() && !config.attribute(name).is_null())
        .map(|(name, _)| *name)
        .collect()
}

fn report_drift(diags: &mut Diagnostics, brand_id: &str, drifted: Vec<String>) {
    for name in drifted {
        tracing::warn!("brand {} differs from configuration on {}", brand_id, name);
        diags.warning(
            "Brand value differs from configuration",
            format!("The brand `{brand_id}` has been tracked without being modified. The configured `{name}` will be applied on the next update."),
            AttributePath::new(name),
        );
    }
}

impl<'a> From<&BrandResourceState<'a>> for BrandRequest {
    fn from(state: &BrandResourceState<'a>) -> Self {
        Self {
            agree_to_custom_privacy_policy: state.agree_to_custom_privacy_policy.as_option(),
            custom_privacy_policy_url: state
                .custom_privacy_policy_url
                .as_deref_option()
                .unwrap_or_default()
                .to_owned(),
            remove_powered_by_okta: state.remove_powered_by_okta.unwrap_or(false),
        }
    }
}

#[async_trait]
impl<T> Resource for BrandResource<T>
where
    T: BrandApi,
{
    type State<'a> = BrandResourceState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(BrandResourceState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags, Default::default());

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Some(id) = state.id.as_deref_option().map(str::to_owned) else {
            return Some((state, private_state));
        };

        let brand = self.fetch(diags, &id, AttributePath::new("id")).await?;
        let attrs = flatten_brand_diags(diags, &brand, AttributePath::new("links"))?;

        let mut state = state;
        state.set_brand(brand.id, &attrs, &[]);
        if state.brand_id.is_null() {
            state.brand_id = Value::Value(Cow::Owned(id));
        }

        Some((state, private_state))
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = proposed_state.plan(diags, &Default::default(), &config_state);

        Some((state, Default::default()))
    }
    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<tf_provider::AttributePath>,
    )> {
        let state = proposed_state.plan(diags, &prior_state, &config_state);

        Some((state, prior_private_state, vec![]))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = planned_state;
        state.normalize(diags);

        let state = self.track(diags, state, &config_state).await?;

        Some((state, private_state))
    }
    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        if PlannedChanges::new(&prior_state, &planned_state).has_change("brand_id") {
            let state = self.track(diags, planned_state, &config_state).await?;
            return Some((state, private_state));
        }

        let Some(id) = prior_state.id.as_deref_option().map(str::to_owned) else {
            diags.root_error_short("Brand to update has no id");
            return None;
        };

        let pending = pending_writes(&BRAND_RESOURCE_SCHEMA, &prior_state, &planned_state);
        let brand = if pending.is_empty() {
            self.fetch(diags, &id, AttributePath::new("id")).await?
        } else {
            tracing::debug!("updating brand {} ({})", id, pending.join(", "));
            let api = self.api.get(diags).await?;
            match api.update_brand(&id, &BrandRequest::from(&planned_state)).await {
                Ok(brand) => brand,
                Err(err) => {
                    diags.error(
                        "Failed to update brand",
                        err.to_string(),
                        AttributePath::new(pending[0]),
                    );
                    return None;
                }
            }
        };
        let attrs = flatten_brand_diags(diags, &brand, AttributePath::new("links"))?;

        let mut state = planned_state;
        let configured = configured_attributes(&config_state);
        let drifted = state.set_brand(brand.id, &attrs, &configured);
        report_drift(diags, &id, drifted);

        Some((state, private_state))
    }
    async fn destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        tracing::info!(
            "brand {} cannot be deleted, removing it from state only",
            state.id.as_deref_option().unwrap_or_default()
        );
        Some(())
    }
    async fn import<'a>(
        &self,
        _diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = Self::State {
            id: Value::Value(Cow::Owned(id.clone())),
            brand_id: Value::Value(Cow::Owned(id)),
            ..Default::default()
        };
        Some((state, Default::default()))
    }
}
