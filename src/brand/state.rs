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

use serde::{Deserialize, Serialize};
use tf_provider::value::{Value, ValueBool, ValueList, ValueString};

use crate::utils::{
    assign_bool, assign_string, bool_attr, string_attr, AttrValue, WithAttributes,
};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandResourceState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub brand_id: ValueString<'a>,
    pub agree_to_custom_privacy_policy: ValueBool,
    #[serde(borrow = "'a")]
    pub custom_privacy_policy_url: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub links: ValueString<'a>,
    pub remove_powered_by_okta: ValueBool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDataSourceState<'a> {
    #[serde(borrow = "'a")]
    pub brand_id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub custom_privacy_policy_url: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub links: ValueString<'a>,
    pub remove_powered_by_okta: ValueBool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandsDataSourceState<'a> {
    #[serde(borrow = "'a")]
    pub brands: ValueList<Value<BrandItem<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandItem<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub custom_privacy_policy_url: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub links: ValueString<'a>,
    pub remove_powered_by_okta: ValueBool,
}

impl<'a> WithAttributes for BrandResourceState<'a> {
    fn attribute(&self, name: &str) -> Value<AttrValue> {
        match name {
            "id" => string_attr(&self.id),
            "brand_id" => string_attr(&self.brand_id),
            "agree_to_custom_privacy_policy" => bool_attr(&self.agree_to_custom_privacy_policy),
            "custom_privacy_policy_url" => string_attr(&self.custom_privacy_policy_url),
            "links" => string_attr(&self.links),
            "remove_powered_by_okta" => bool_attr(&self.remove_powered_by_okta),
            _ => Value::Null,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value<AttrValue>) {
        match name {
            "id" => assign_string(&mut self.id, value),
            "brand_id" => assign_string(&mut self.brand_id, value),
            "agree_to_custom_privacy_policy" => {
                assign_bool(&mut self.agree_to_custom_privacy_policy, value)
            }
            "custom_privacy_policy_url" => {
                assign_string(&mut self.custom_privacy_policy_url, value)
            }
            "links" => assign_string(&mut self.links, value),
            "remove_powered_by_okta" => assign_bool(&mut self.remove_powered_by_okta, value),
            _ => (),
        }
    }
}
