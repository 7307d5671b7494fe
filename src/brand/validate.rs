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

use tf_provider::value::Value;
use tf_provider::{AttributePath, Diagnostics};

use crate::utils::{WithAttributes, WithValidate};

use super::schema::{SchemaTable, BRAND_RESOURCE_SCHEMA};
use super::state::{BrandDataSourceState, BrandResourceState};

/// Check that attributes declaring `required_with` are only set together
pub(crate) fn validate_required_with<S: WithAttributes>(
    diags: &mut Diagnostics,
    table: &SchemaTable,
    config: &S,
    attr_path: &AttributePath,
) {
    for (name, spec) in table {
        if spec.required_with.is_empty() || config.attribute(name).is_null() {
            continue;
        }
        let missing = spec
            .required_with
            .iter()
            .any(|other| config.attribute(other).is_null());
        if missing {
            let all = std::iter::once(*name)
                .chain(spec.required_with.iter().copied())
                .collect::<Vec<_>>()
                .join(",");
            diags.error(
                "Missing required argument",
                format!("all of `{all}` must be specified"),
                attr_path.clone().attribute(name.to_string()),
            );
        }
    }
}

impl<'a> WithValidate for BrandResourceState<'a> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        validate_required_with(diags, &BRAND_RESOURCE_SCHEMA, self, &attr_path);

        if let Value::Value(brand_id) = &self.brand_id {
            if brand_id.is_empty() {
                diags.error_short(
                    "`brand_id` must not be empty",
                    attr_path.attribute("brand_id"),
                );
            }
        }
    }
}

impl<'a> WithValidate for BrandDataSourceState<'a> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(brand_id) = &self.brand_id {
            if brand_id.is_empty() {
                diags.error_short(
                    "`brand_id` must not be empty",
                    attr_path.attribute("brand_id"),
                );
            }
        }
    }
}
