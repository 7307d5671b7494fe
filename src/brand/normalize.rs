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
use tf_provider::Diagnostics;

use crate::utils::{WithAttributes, WithNormalize};

use super::schema::{SchemaTable, BRAND_RESOURCE_SCHEMA};
use super::state::BrandResourceState;
use super::suppress::{ChangeSet, PlannedChanges};

impl<'a> WithNormalize for BrandResourceState<'a> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.id.is_null() {
            self.id = Value::Unknown;
        }
        if self.links.is_null() {
            self.links = Value::Unknown;
        }
    }
}

/// Fill the attributes left null in the configuration with their default
pub(crate) fn apply_defaults<S: WithAttributes>(table: &SchemaTable, config: &S, state: &mut S) {
    for (name, spec) in table {
        if let Some(default) = &spec.default {
            if config.attribute(name).is_null() {
                state.set_attribute(name, Value::Value(default.clone()));
            }
        }
    }
}

impl<'a> BrandResourceState<'a> {
    /// Compute the planned state from the proposed one.
    ///
    /// When `brand_id` changes, the resource is pointed at another brand:
    /// everything the configuration does not set will be read from it.
    pub(crate) fn plan(
        &self,
        diags: &mut Diagnostics,
        prior: &BrandResourceState<'a>,
        config: &BrandResourceState<'a>,
    ) -> BrandResourceState<'a> {
        let mut state = self.clone();
        apply_defaults(&BRAND_RESOURCE_SCHEMA, config, &mut state);

        if PlannedChanges::new(prior, &state).has_change("brand_id") {
            state.id = Value::Unknown;
            state.links = Value::Unknown;
            for (name, spec) in BRAND_RESOURCE_SCHEMA.iter() {
                if spec.diff_suppress.is_some() && config.attribute(name).is_null() {
                    state.set_attribute(name, Value::Unknown);
                }
            }
        } else {
            state.id = prior.id.clone();
            state.links = prior.links.clone();
        }

        state.normalize(diags);
        state
    }
}
