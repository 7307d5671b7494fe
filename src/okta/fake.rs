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

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{Brand, BrandApi, BrandRequest, OptionalFlag};

/// In-memory brand store recording every update
#[derive(Debug, Default)]
pub struct FakeBrandApi {
    pub brands: Mutex<BTreeMap<String, Brand>>,
    pub updates: Mutex<Vec<(String, BrandRequest)>>,
}

impl FakeBrandApi {
    pub fn with_brands<I: IntoIterator<Item = Brand>>(brands: I) -> Self {
        Self {
            brands: Mutex::new(
                brands
                    .into_iter()
                    .map(|brand| (brand.id.clone(), brand))
                    .collect(),
            ),
            updates: Default::default(),
        }
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl BrandApi for FakeBrandApi {
    async fn list_brands(&self) -> Result<Vec<Brand>> {
        Ok(self.brands.lock().unwrap().values().cloned().collect())
    }

    async fn get_brand(&self, brand_id: &str) -> Result<Option<Brand>> {
        Ok(self.brands.lock().unwrap().get(brand_id).cloned())
    }

    async fn update_brand(&self, brand_id: &str, request: &BrandRequest) -> Result<Brand> {
        self.updates
            .lock()
            .unwrap()
            .push((brand_id.to_owned(), request.clone()));

        let mut brands = self.brands.lock().unwrap();
        let brand = brands
            .get_mut(brand_id)
            .ok_or_else(|| anyhow!("Brand `{brand_id}` does not exist"))?;
        brand.custom_privacy_policy_url = request.custom_privacy_policy_url.clone();
        brand.remove_powered_by_okta = OptionalFlag::Present(request.remove_powered_by_okta);
        Ok(brand.clone())
    }
}
