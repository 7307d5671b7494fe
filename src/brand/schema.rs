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

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};

use crate::utils::{AttrValue, WithSchema};

use super::state::{BrandDataSourceState, BrandResourceState, BrandsDataSourceState};
use super::suppress::{suppress_during_create, SuppressFn};

const BRAND_ID_DESCRIPTION: &str = "Brand ID";
const QUASI_BRAND_ID_DESCRIPTION: &str = "Brand ID - Note: Okta API for brands only reads and updates therefore the okta_brand resource needs to act as a quasi data source. Do this by setting brand_id.";
const AGREE_DESCRIPTION: &str = "Consent for updating the custom privacy policy URL.";
const PRIVACY_POLICY_DESCRIPTION: &str = "Custom privacy policy URL";
const LINKS_DESCRIPTION: &str =
    "Link relations for this object - JSON HAL - Discoverable resources related to the brand";
const POWERED_BY_DESCRIPTION: &str = "Removes \"Powered by Okta\" from the Okta-hosted sign-in page and \"© 2021 Okta, Inc.\" from the Okta End-User Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrKind {
    String,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
    Computed,
}

/// Field-level contract of a primitive attribute
#[derive(Debug, Clone)]
pub(crate) struct AttributeSpec {
    pub kind: AttrKind,
    pub presence: Presence,
    pub default: Option<AttrValue>,
    pub diff_suppress: Option<SuppressFn>,
    pub required_with: &'static [&'static str],
    pub description: &'static str,
}

impl AttributeSpec {
    fn new(kind: AttrKind, presence: Presence, description: &'static str) -> Self {
        Self {
            kind,
            presence,
            default: None,
            diff_suppress: None,
            required_with: &[],
            description,
        }
    }
    fn string(presence: Presence, description: &'static str) -> Self {
        Self::new(AttrKind::String, presence, description)
    }
    fn bool(presence: Presence, description: &'static str) -> Self {
        Self::new(AttrKind::Bool, presence, description)
    }
    fn with_default(self, default: AttrValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
    fn with_suppress(self, diff_suppress: SuppressFn) -> Self {
        Self {
            diff_suppress: Some(diff_suppress),
            ..self
        }
    }
    fn with_required_with(self, required_with: &'static [&'static str]) -> Self {
        Self {
            required_with,
            ..self
        }
    }

    /// Constraint as seen by Terraform.
    /// An optional attribute the provider may fill itself must be computed as well.
    pub(crate) fn constraint(&self) -> AttributeConstraint {
        match self.presence {
            Presence::Required => AttributeConstraint::Required,
            Presence::Computed => AttributeConstraint::Computed,
            Presence::Optional if self.default.is_some() || self.diff_suppress.is_some() => {
                AttributeConstraint::OptionalComputed
            }
            Presence::Optional => AttributeConstraint::Optional,
        }
    }

    pub(crate) fn attribute(&self) -> Attribute {
        Attribute {
            attr_type: match self.kind {
                AttrKind::String => AttributeType::String,
                AttrKind::Bool => AttributeType::Bool,
            },
            description: Description::plain(self.description),
            constraint: self.constraint(),
            ..Default::default()
        }
    }
}

pub(crate) type SchemaTable = BTreeMap<&'static str, AttributeSpec>;

lazy_static! {
    pub(crate) static ref BRAND_RESOURCE_SCHEMA: SchemaTable = BTreeMap::from([
        (
            "id",
            AttributeSpec::string(Presence::Computed, BRAND_ID_DESCRIPTION),
        ),
        (
            "brand_id",
            AttributeSpec::string(Presence::Optional, QUASI_BRAND_ID_DESCRIPTION),
        ),
        (
            "agree_to_custom_privacy_policy",
            AttributeSpec::bool(Presence::Optional, AGREE_DESCRIPTION)
                .with_required_with(&["custom_privacy_policy_url"]),
        ),
        (
            "custom_privacy_policy_url",
            AttributeSpec::string(Presence::Optional, PRIVACY_POLICY_DESCRIPTION)
                .with_suppress(suppress_during_create),
        ),
        (
            "links",
            AttributeSpec::string(Presence::Computed, LINKS_DESCRIPTION),
        ),
        (
            "remove_powered_by_okta",
            AttributeSpec::bool(Presence::Optional, POWERED_BY_DESCRIPTION)
                .with_default(AttrValue::Bool(false))
                .with_suppress(suppress_during_create),
        ),
    ]);
    pub(crate) static ref BRAND_DATA_SOURCE_SCHEMA: SchemaTable = BTreeMap::from([
        (
            "brand_id",
            AttributeSpec::string(Presence::Required, BRAND_ID_DESCRIPTION),
        ),
        (
            "custom_privacy_policy_url",
            AttributeSpec::string(Presence::Computed, PRIVACY_POLICY_DESCRIPTION),
        ),
        (
            "links",
            AttributeSpec::string(Presence::Computed, LINKS_DESCRIPTION),
        ),
        (
            "remove_powered_by_okta",
            AttributeSpec::bool(Presence::Computed, POWERED_BY_DESCRIPTION),
        ),
    ]);
    pub(crate) static ref BRANDS_DATA_SOURCE_SCHEMA: SchemaTable = BTreeMap::from([
        (
            "id",
            AttributeSpec::string(Presence::Computed, BRAND_ID_DESCRIPTION),
        ),
        (
            "custom_privacy_policy_url",
            AttributeSpec::string(Presence::Computed, PRIVACY_POLICY_DESCRIPTION),
        ),
        (
            "links",
            AttributeSpec::string(Presence::Computed, LINKS_DESCRIPTION),
        ),
        (
            "remove_powered_by_okta",
            AttributeSpec::bool(Presence::Computed, POWERED_BY_DESCRIPTION),
        ),
    ]);
}

pub(crate) fn attributes(table: &SchemaTable) -> HashMap<String, Attribute> {
    table
        .iter()
        .map(|(name, spec)| (name.to_string(), spec.attribute()))
        .collect()
}

impl<'a> WithSchema for BrandResourceState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: attributes(&BRAND_RESOURCE_SCHEMA),
                description: Description::plain("Manage the settings of an existing Okta brand"),
                ..Default::default()
            },
        }
    }
}

impl<'a> WithSchema for BrandDataSourceState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: attributes(&BRAND_DATA_SOURCE_SCHEMA),
                description: Description::plain("Get a single brand from Okta"),
                ..Default::default()
            },
        }
    }
}

impl<'a> WithSchema for BrandsDataSourceState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: HashMap::from([(
                    "brands".to_owned(),
                    Attribute {
                        attr_type: AttributeType::AttributeList(attributes(
                            &BRANDS_DATA_SOURCE_SCHEMA,
                        )),
                        description: Description::plain("List of brands"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                )]),
                description: Description::plain("Get the list of brands from Okta"),
                ..Default::default()
            },
        }
    }
}
