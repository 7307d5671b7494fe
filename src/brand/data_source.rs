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

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{schema::Schema, AttributePath, DataSource, Diagnostics};

use crate::okta::{ApiHandle, BrandApi};
use crate::utils::{WithSchema, WithValidate};

use super::flatten::flatten_brand_diags;
use super::state::{BrandDataSourceState, BrandItem, BrandsDataSourceState};

#[derive(Debug, Default)]
pub struct BrandDataSource<T: BrandApi> {
    pub(super) api: ApiHandle<T>,
}

impl<T: BrandApi> BrandDataSource<T> {
    pub fn new(api: ApiHandle<T>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<T> DataSource for BrandDataSource<T>
where
    T: BrandApi,
{
    type State<'a> = BrandDataSourceState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(BrandDataSourceState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags, AttributePath::default());

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let attr_path = AttributePath::new("brand_id");
        let Some(brand_id) = config.brand_id.as_deref_option() else {
            diags.error_short("`brand_id` must be known", attr_path);
            return None;
        };

        let api = self.api.get(diags).await?;
        let brand = match api.get_brand(brand_id).await {
            Ok(Some(brand)) => brand,
            Ok(None) => {
                diags.error(
                    "Brand not found",
                    format!("The brand `{brand_id}` does not exist in this organization."),
                    attr_path,
                );
                return None;
            }
            Err(err) => {
                diags.error("Failed to read brand", err.to_string(), attr_path);
                return None;
            }
        };
        let attrs = flatten_brand_diags(diags, &brand, AttributePath::new("links"))?;

        let mut state = config.clone();
        state.set_brand(attrs);

        Some(state)
    }
}

#[derive(Debug, Default)]
pub struct BrandsDataSource<T: BrandApi> {
    pub(super) api: ApiHandle<T>,
}

impl<T: BrandApi> BrandsDataSource<T> {
    pub fn new(api: ApiHandle<T>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<T> DataSource for BrandsDataSource<T>
where
    T: BrandApi,
{
    type State<'a> = BrandsDataSourceState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(BrandsDataSourceState::schema())
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags).await?;
        let brands = match api.list_brands().await {
            Ok(brands) => brands,
            Err(err) => {
                diags.root_error("Failed to list brands", err.to_string());
                return None;
            }
        };

        let mut items = Vec::with_capacity(brands.len());
        for (i, brand) in brands.into_iter().enumerate() {
            let attr_path = AttributePath::new("brands").index(i as i64).attribute("links");
            let attrs = flatten_brand_diags(diags, &brand, attr_path)?;
            items.push(Value::Value(BrandItem::new(brand.id, attrs)));
        }

        Some(BrandsDataSourceState {
            brands: Value::Value(items),
        })
    }
}
