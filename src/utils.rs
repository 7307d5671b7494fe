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
use std::fmt::Display;

use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueBool, ValueString};
use tf_provider::{AttributePath, Diagnostics};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

pub(crate) trait WithValidate {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath);
}

pub(crate) trait WithNormalize {
    fn normalize(&mut self, diags: &mut Diagnostics);
}

/// Scalar value of a primitive attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrValue {
    String(String),
    Bool(bool),
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::String(s) => f.write_str(s),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Access the primitive attributes of a state by name
pub(crate) trait WithAttributes {
    fn attribute(&self, name: &str) -> Value<AttrValue>;
    fn set_attribute(&mut self, name: &str, value: Value<AttrValue>);
}

pub(crate) fn string_attr(value: &ValueString<'_>) -> Value<AttrValue> {
    value.as_ref().map(|s| AttrValue::String(s.to_string()))
}

pub(crate) fn bool_attr(value: &ValueBool) -> Value<AttrValue> {
    value.as_ref().map(|b| AttrValue::Bool(*b))
}

pub(crate) fn assign_string<'a>(target: &mut ValueString<'a>, value: Value<AttrValue>) {
    *target = match value {
        Value::Value(AttrValue::String(s)) => Value::Value(Cow::Owned(s)),
        Value::Value(AttrValue::Bool(_)) => return,
        Value::Null => Value::Null,
        Value::Unknown => Value::Unknown,
    };
}

pub(crate) fn assign_bool(target: &mut ValueBool, value: Value<AttrValue>) {
    *target = match value {
        Value::Value(AttrValue::Bool(b)) => Value::Value(b),
        Value::Value(AttrValue::String(_)) => return,
        Value::Null => Value::Null,
        Value::Unknown => Value::Unknown,
    };
}
