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

use crate::utils::{AttrValue, WithAttributes};

use super::schema::SchemaTable;

/// Decide if a difference on `key` between `old` and `new` must be ignored
pub(crate) type SuppressFn =
    fn(key: &str, old: &str, new: &str, changes: &dyn ChangeSet) -> bool;

/// Read-only view over the pending changes of a resource
pub(crate) trait ChangeSet {
    fn has_change(&self, key: &str) -> bool;
}

/// Changes between the prior state and the planned state
pub(crate) struct PlannedChanges<'s, S> {
    prior: &'s S,
    planned: &'s S,
}

impl<'s, S: WithAttributes> PlannedChanges<'s, S> {
    pub(crate) fn new(prior: &'s S, planned: &'s S) -> Self {
        Self { prior, planned }
    }
}

impl<'s, S: WithAttributes> ChangeSet for PlannedChanges<'s, S> {
    fn has_change(&self, key: &str) -> bool {
        let new = self.planned.attribute(key);
        new.is_unknown() || diff_string(&self.prior.attribute(key)) != diff_string(&new)
    }
}

/// String form of a value as compared by suppression functions, null being empty
pub(crate) fn diff_string(value: &Value<AttrValue>) -> String {
    match value {
        Value::Value(value) => value.to_string(),
        Value::Null | Value::Unknown => String::new(),
    }
}

/// Brands cannot be created: when `brand_id` changes, the resource starts
/// tracking another existing brand and its fields are read, not written.
pub(crate) fn suppress_during_create(
    _key: &str,
    old: &str,
    new: &str,
    changes: &dyn ChangeSet,
) -> bool {
    if changes.has_change("brand_id") {
        return true;
    }
    old == new
}

/// Guarded attributes whose difference is not suppressed and must be written
pub(crate) fn pending_writes<S: WithAttributes>(
    table: &SchemaTable,
    prior: &S,
    planned: &S,
) -> Vec<&'static str> {
    let changes = PlannedChanges::new(prior, planned);
    table
        .iter()
        .filter_map(|(name, spec)| {
            let suppress = spec.diff_suppress?;
            let new = planned.attribute(name);
            if new.is_unknown() {
                return (!changes.has_change("brand_id")).then_some(*name);
            }
            let old = diff_string(&prior.attribute(name));
            (!suppress(name, &old, &diff_string(&new), &changes)).then_some(*name)
        })
        .collect()
}
