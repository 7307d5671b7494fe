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

use serde::Serialize;
use tf_provider::value::Value;
use tf_provider::{AttributePath, Diagnostics};

use crate::okta::{Brand, OptionalFlag};
use crate::utils::{AttrValue, WithAttributes};

use super::state::{BrandDataSourceState, BrandItem, BrandResourceState};

/// Brand fields as stored in the Terraform state
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BrandAttributes {
    pub custom_privacy_policy_url: String,
    pub links: String,
    pub remove_powered_by_okta: bool,
}

pub fn flatten_brand(brand: &Brand) -> Result<BrandAttributes, serde_json::Error> {
    let mut attrs = BrandAttributes::default();
    if !brand.custom_privacy_policy_url.is_empty() {
        attrs
            .custom_privacy_policy_url
            .clone_from(&brand.custom_privacy_policy_url);
    }
    attrs.links = serde_json::to_string(&brand.links)?;
    if let OptionalFlag::Present(remove_powered_by_okta) = brand.remove_powered_by_okta {
        attrs.remove_powered_by_okta = remove_powered_by_okta;
    }
    Ok(attrs)
}

/// Flatten a brand, reporting an encoding failure on `links`
pub(crate) fn flatten_brand_diags(
    diags: &mut Diagnostics,
    brand: &Brand,
    attr_path: AttributePath,
) -> Option<BrandAttributes> {
    match flatten_brand(brand) {
        Ok(attrs) => Some(attrs),
        Err(err) => {
            diags.error("Failed to encode brand links", err.to_string(), attr_path);
            None
        }
    }
}

impl BrandAttributes {
    pub(crate) fn value(&self, name: &str) -> Value<AttrValue> {
        match name {
            "custom_privacy_policy_url" => {
                Value::Value(AttrValue::String(self.custom_privacy_policy_url.clone()))
            }
            "links" => Value::Value(AttrValue::String(self.links.clone())),
            "remove_powered_by_okta" => Value::Value(AttrValue::Bool(self.remove_powered_by_okta)),
            _ => Value::Null,
        }
    }
}

impl<'a> BrandDataSourceState<'a> {
    pub(crate) fn set_brand(&mut self, attrs: BrandAttributes) {
        self.custom_privacy_policy_url = Value::Value(Cow::Owned(attrs.custom_privacy_policy_url));
        self.links = Value::Value(Cow::Owned(attrs.links));
        self.remove_powered_by_okta = Value::Value(attrs.remove_powered_by_okta);
    }
}

impl<'a> BrandItem<'a> {
    pub(crate) fn new(id: String, attrs: BrandAttributes) -> Self {
        Self {
            id: Value::Value(Cow::Owned(id)),
            custom_privacy_policy_url: Value::Value(Cow::Owned(attrs.custom_privacy_policy_url)),
            links: Value::Value(Cow::Owned(attrs.links)),
            remove_powered_by_okta: Value::Value(attrs.remove_powered_by_okta),
        }
    }
}

impl<'a> BrandResourceState<'a> {
    /// Store the remote brand in the state.
    ///
    /// The attributes listed in `keep` retain their current value, and the names
    /// of those whose remote value differs are returned.
    pub(crate) fn set_brand(
        &mut self,
        id: String,
        attrs: &BrandAttributes,
        keep: &[&str],
    ) -> Vec<String> {
        self.id = Value::Value(Cow::Owned(id));

        let mut drifted = Vec::new();
        for name in ["custom_privacy_policy_url", "links", "remove_powered_by_okta"] {
            let remote = attrs.value(name);
            if keep.contains(&name) {
                if self.attribute(name) != remote {
                    drifted.push(name.to_owned());
                }
            } else {
                self.set_attribute(name, remote);
            }
        }
        drifted
    }
}
