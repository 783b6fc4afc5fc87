//! Node description assembly and shared property builders

use serde_json::{json, Value};

use super::resource::{Operation, Resource};
use super::{connection, contact, deal, ecom_customer, ecom_order, ecom_order_products};
use crate::description::{CredentialRequirement, NodeDescription, NodeProperty, PropertyOption};

pub const NODE_TYPE: &str = "activeCampaign";
pub const CREDENTIALS_NAME: &str = "activeCampaignApi";

/// Maximum page size the v3 API accepts for `limit`
pub const MAX_LIMIT: u64 = 500;

pub fn node_description() -> NodeDescription {
    let mut properties = vec![resource_property()];
    properties.extend(contact::properties());
    properties.extend(deal::properties());
    properties.extend(connection::properties());
    properties.extend(ecom_order::properties());
    properties.extend(ecom_customer::properties());
    properties.extend(ecom_order_products::properties());

    NodeDescription {
        display_name: "ActiveCampaign".to_string(),
        name: NODE_TYPE.to_string(),
        icon: "file:activeCampaign.png".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        subtitle: "={{$parameter[\"operation\"] + \": \" + $parameter[\"resource\"]}}".to_string(),
        description: "Create and edit data in ActiveCampaign".to_string(),
        defaults: json!({"name": "ActiveCampaign", "color": "#356ae6"}),
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        credentials: vec![CredentialRequirement {
            name: CREDENTIALS_NAME.to_string(),
            required: true,
        }],
        properties,
    }
}

fn resource_property() -> NodeProperty {
    NodeProperty::options(
        "resource",
        "Resource",
        vec![
            PropertyOption::new("Contact", Resource::Contact.as_str()),
            PropertyOption::new("Deal", Resource::Deal.as_str()),
            PropertyOption::new("Connection", Resource::Connection.as_str()),
            PropertyOption::new("E-commerce Order", Resource::EcommerceOrder.as_str()),
            PropertyOption::new("E-commerce Customer", Resource::EcommerceCustomer.as_str()),
            PropertyOption::new("E-commerce Order Products", Resource::EcommerceOrderProducts.as_str()),
        ],
    )
    .with_default(json!(Resource::Contact.as_str()))
    .with_description("The resource to operate on.")
}

fn op_names(operations: &[Operation]) -> Vec<&'static str> {
    operations.iter().map(Operation::as_str).collect()
}

/// Show a property only for `resource` and the given operations
pub fn shown(property: NodeProperty, resource: Resource, operations: &[Operation]) -> NodeProperty {
    property.show_for(&[resource.as_str()], &op_names(operations))
}

/// The per-resource `operation` selector
pub fn operation_property(
    resource: Resource,
    options: Vec<PropertyOption>,
    default: Operation,
) -> NodeProperty {
    NodeProperty::options("operation", "Operation", options)
        .with_default(json!(default.as_str()))
        .with_description("The operation to perform.")
        .show_for(&[resource.as_str()], &[])
}

pub fn operation_option(name: &str, operation: Operation, description: &str) -> PropertyOption {
    PropertyOption::new(name, operation.as_str()).with_description(description)
}

/// Record id that must be supplied by the user
pub fn id_property(
    name: &str,
    display_name: &str,
    resource: Resource,
    operations: &[Operation],
    description: &str,
) -> NodeProperty {
    let property = NodeProperty::number(name, display_name)
        .required()
        .with_default(Value::Null)
        .with_description(description);
    shown(property, resource, operations)
}

/// `returnAll` and `limit` for a resource's `getAll`
pub fn return_all_properties(resource: Resource) -> Vec<NodeProperty> {
    let return_all = NodeProperty::boolean("returnAll", "Return All")
        .with_description("If all results should be returned or only up to a given limit.");
    let limit = NodeProperty::number("limit", "Limit")
        .with_default(json!(100))
        .with_type_options(json!({"minValue": 1, "maxValue": MAX_LIMIT}))
        .with_description("How many results to return.")
        .show("returnAll", &[json!(false)]);

    vec![
        shown(return_all, resource, &[Operation::GetAll]),
        shown(limit, resource, &[Operation::GetAll]),
    ]
}

/// `customProperties` fixed collection of `{name, value}` pairs
pub fn custom_properties() -> NodeProperty {
    NodeProperty::fixed_collection(
        "customProperties",
        "Custom Properties",
        vec![NodeProperty::collection(
            "property",
            "Property",
            vec![
                NodeProperty::string("name", "Property Name")
                    .with_description("Name of the property to set."),
                NodeProperty::string("value", "Property Value")
                    .with_description("Value of the property to set."),
            ],
        )],
    )
    .with_type_options(json!({"multipleValues": true}))
    .with_description("Adds a custom property to set also values which have not been predefined.")
}

pub fn currency_property(name: &str) -> NodeProperty {
    const CURRENCIES: &[(&str, &str)] = &[
        ("Australian Dollar", "aud"),
        ("Brazilian Real", "brl"),
        ("British Pound", "gbp"),
        ("Canadian Dollar", "cad"),
        ("Chinese Yuan", "cny"),
        ("Danish Krone", "dkk"),
        ("Euro", "eur"),
        ("Hong Kong Dollar", "hkd"),
        ("Indian Rupee", "inr"),
        ("Japanese Yen", "jpy"),
        ("Mexican Peso", "mxn"),
        ("New Zealand Dollar", "nzd"),
        ("Norwegian Krone", "nok"),
        ("Polish Zloty", "pln"),
        ("Singapore Dollar", "sgd"),
        ("South African Rand", "zar"),
        ("Swedish Krona", "sek"),
        ("Swiss Franc", "chf"),
        ("US Dollar", "usd"),
    ];

    NodeProperty::options(
        name,
        "Currency",
        CURRENCIES
            .iter()
            .map(|(label, code)| PropertyOption::new(label, *code))
            .collect(),
    )
    .with_default(json!("eur"))
    .with_description("The currency, as a three-letter ISO code.")
}
