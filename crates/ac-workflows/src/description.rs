//! Node Description - Static metadata a node publishes to the host
//!
//! The host renders forms from these properties. A property is only visible
//! when every condition in its `displayOptions.show` matches the current
//! parameter values, so the same name (e.g. `operation`, `email`) can be
//! declared once per resource.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Form control type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
    Options,
    Collection,
    FixedCollection,
    DateTime,
}

impl PropertyKind {
    /// Value used when a property declares no explicit default
    pub fn empty_default(&self) -> Value {
        match self {
            PropertyKind::String | PropertyKind::Options | PropertyKind::DateTime => json!(""),
            PropertyKind::Number => json!(0),
            PropertyKind::Boolean => json!(false),
            PropertyKind::Collection | PropertyKind::FixedCollection => json!({}),
        }
    }
}

/// One choice of an `options` property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyOption {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// Visibility conditions keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<Value>>,
}

impl DisplayOptions {
    /// True when every condition matches the looked-up parameter value
    pub fn matches(&self, lookup: &dyn Fn(&str) -> Option<Value>) -> bool {
        self.show.iter().all(|(key, allowed)| match lookup(key.as_str()) {
            Some(value) => allowed.contains(&value),
            None => false,
        })
    }
}

/// A form field of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub default: Value,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    /// Children of `collection` / `fixedCollection` properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<NodeProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<Value>,
}

impl NodeProperty {
    pub fn new(name: &str, display_name: &str, kind: PropertyKind) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            kind,
            default: kind.empty_default(),
            required: false,
            description: None,
            display_options: None,
            options: Vec::new(),
            fields: Vec::new(),
            type_options: None,
        }
    }

    pub fn string(name: &str, display_name: &str) -> Self {
        Self::new(name, display_name, PropertyKind::String)
    }

    pub fn number(name: &str, display_name: &str) -> Self {
        Self::new(name, display_name, PropertyKind::Number)
    }

    pub fn boolean(name: &str, display_name: &str) -> Self {
        Self::new(name, display_name, PropertyKind::Boolean)
    }

    pub fn date_time(name: &str, display_name: &str) -> Self {
        Self::new(name, display_name, PropertyKind::DateTime)
    }

    pub fn options(name: &str, display_name: &str, options: Vec<PropertyOption>) -> Self {
        let mut prop = Self::new(name, display_name, PropertyKind::Options);
        prop.options = options;
        prop
    }

    pub fn collection(name: &str, display_name: &str, fields: Vec<NodeProperty>) -> Self {
        let mut prop = Self::new(name, display_name, PropertyKind::Collection);
        prop.fields = fields;
        prop
    }

    pub fn fixed_collection(name: &str, display_name: &str, fields: Vec<NodeProperty>) -> Self {
        let mut prop = Self::new(name, display_name, PropertyKind::FixedCollection);
        prop.fields = fields;
        prop
    }

    /// Required property with no usable default; hosts must supply a value
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = value;
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn with_type_options(mut self, type_options: Value) -> Self {
        self.type_options = Some(type_options);
        self
    }

    /// Add a visibility condition `key in values`
    pub fn show(mut self, key: &str, values: &[Value]) -> Self {
        self.display_options
            .get_or_insert_with(DisplayOptions::default)
            .show
            .insert(key.to_string(), values.to_vec());
        self
    }

    /// Shorthand for the usual resource + operation conditions
    pub fn show_for(self, resources: &[&str], operations: &[&str]) -> Self {
        let resources: Vec<Value> = resources.iter().map(|r| json!(r)).collect();
        let prop = self.show("resource", &resources);
        if operations.is_empty() {
            return prop;
        }
        let operations: Vec<Value> = operations.iter().map(|o| json!(o)).collect();
        prop.show("operation", &operations)
    }

    pub fn is_visible(&self, lookup: &dyn Fn(&str) -> Option<Value>) -> bool {
        self.display_options
            .as_ref()
            .map_or(true, |opts| opts.matches(lookup))
    }

    /// A required property whose default cannot stand in for a user value
    pub fn needs_value(&self) -> bool {
        self.required
            && match &self.default {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                _ => false,
            }
    }
}

/// Credential a node needs from the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

/// Full static description of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub icon: String,
    pub group: Vec<String>,
    pub version: u32,
    pub subtitle: String,
    pub description: String,
    pub defaults: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub credentials: Vec<CredentialRequirement>,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    /// Properties visible for the looked-up parameter values
    pub fn visible_properties<'a>(
        &'a self,
        lookup: &'a dyn Fn(&str) -> Option<Value>,
    ) -> impl Iterator<Item = &'a NodeProperty> + 'a {
        self.properties.iter().filter(move |p| p.is_visible(lookup))
    }

    /// Default of the first visible property called `name`
    pub fn default_for(&self, name: &str, lookup: &dyn Fn(&str) -> Option<Value>) -> Option<Value> {
        self.properties
            .iter()
            .filter(|p| p.name == name)
            .find(|p| p.is_visible(lookup))
            .map(|p| p.default.clone())
    }

    /// Names of visible properties for a resource/operation pair
    pub fn properties_for(&self, resource: &str, operation: &str) -> Vec<&NodeProperty> {
        let lookup = |key: &str| match key {
            "resource" => Some(json!(resource)),
            "operation" => Some(json!(operation)),
            _ => None,
        };
        self.properties
            .iter()
            .filter(|p| {
                p.display_options.as_ref().map_or(true, |opts| {
                    opts.show
                        .iter()
                        .filter(|(k, _)| k.as_str() == "resource" || k.as_str() == "operation")
                        .all(|(k, allowed)| lookup(k.as_str()).map_or(false, |v| allowed.contains(&v)))
                })
            })
            .collect()
    }
}
