//! ecommerceOrder: orders and abandoned carts of a connected store

use ac_api::ApiCall;
use ac_core::{Error, Result};
use serde_json::{json, Map, Value};

use super::fields::add_additional_fields;
use super::metadata::{currency_property, id_property, operation_option, operation_property, return_all_properties, shown};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::{NodeProperty, PropertyOption};

const RESOURCE: Resource = Resource::EcommerceOrder;

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Create", Create, "Create a order"),
                operation_option("Delete", Delete, "Delete a order"),
                operation_option("Get", Get, "Get data of a order"),
                operation_option("Get All", GetAll, "Get data of all orders"),
                operation_option("Update", Update, "Update a order"),
            ],
            Create,
        ),
        shown(
            NodeProperty::string("externalid", "External ID")
                .with_description("The id of the order in the external service. ONLY REQUIRED IF EXTERNALCHECKOUTID NOT INCLUDED"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("externalcheckoutid", "External checkout ID")
                .with_description("The id of the cart in the external service. ONLY REQUIRED IF EXTERNALID IS NOT INCLUDED."),
            RESOURCE,
            &[Create],
        ),
        shown(source_property().required(), RESOURCE, &[Create]),
        shown(
            NodeProperty::string("email", "Customer Email")
                .required()
                .with_description("The email address of the customer who placed the order."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::number("totalPrice", "Total price")
                .required()
                .with_description("The total price of the order in cents, including tax and shipping charges. (i.e. $456.78 => 45678). Must be greater than or equal to zero."),
            RESOURCE,
            &[Create],
        ),
        shown(currency_property("currency").required(), RESOURCE, &[Create]),
        shown(
            NodeProperty::number("connectionid", "Connection ID")
                .required()
                .with_description("The id of the connection from which this order originated."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::number("customerid", "Customer ID")
                .required()
                .with_description("The id of the customer associated with this order."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::date_time("externalCreatedDate", "Creation Date")
                .required()
                .with_description("The date the order was placed."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::date_time("abandonedDate", "Abandoned Date")
                .with_description("The date the cart was abandoned. REQUIRED ONLY IF INCLUDING EXTERNALCHECKOUTID."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::collection("orderProducts", "Products", product_fields())
                .with_default(json!([]))
                .with_type_options(json!({"multipleValues": true}))
                .with_description("All ordered products"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::collection("additionalFields", "Additional Fields", order_fields()),
            RESOURCE,
            &[Create],
        ),
        id_property("orderId", "Order ID", RESOURCE, &[Delete, Get, Update], "The id of the e-commerce order."),
    ];
    properties.extend(return_all_properties(RESOURCE));

    let mut update_fields = vec![
        NodeProperty::string("externalid", "External ID").with_description("The id of the order in the external service."),
        NodeProperty::string("externalcheckoutid", "External checkout ID")
            .with_description("The id of the cart in the external service."),
        source_property(),
        NodeProperty::string("email", "Customer Email").with_description("The email address of the customer who placed the order."),
        NodeProperty::number("totalPrice", "Total price").with_description("The total price of the order in cents."),
        currency_property("currency"),
        NodeProperty::number("connectionid", "Connection ID").with_description("The id of the connection from which this order originated."),
        NodeProperty::number("customerid", "Customer ID").with_description("The id of the customer associated with this order."),
        NodeProperty::date_time("externalCreatedDate", "Creation Date").with_description("The date the order was placed."),
        NodeProperty::date_time("abandonedDate", "Abandoned Date").with_description("The date the cart was abandoned."),
        NodeProperty::collection("orderProducts", "Products", product_fields())
            .with_default(json!([]))
            .with_type_options(json!({"multipleValues": true})),
    ];
    update_fields.extend(order_fields());
    properties.push(shown(
        NodeProperty::collection("updateFields", "Update Fields", update_fields)
            .with_description("The fields to update."),
        RESOURCE,
        &[Update],
    ));
    properties
}

fn source_property() -> NodeProperty {
    NodeProperty::options(
        "source",
        "Order source",
        vec![
            PropertyOption::new("real-time", "1"),
            PropertyOption::new("historic", "0"),
        ],
    )
    .with_default(json!("1"))
    .with_description("The order source code (0 - will not trigger automations, 1 - will trigger automations).")
}

fn product_fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::string("name", "Name").with_description("The name of the product"),
        NodeProperty::number("price", "Price").with_description("The price of the product, in cents. (i.e. $456.78 => 45678). Must be greater than or equal to zero."),
        NodeProperty::number("quantity", "Product Quantity")
            .with_default(json!(1))
            .with_description("The quantity ordered."),
        NodeProperty::string("externalid", "Product external ID").with_description("The id of the product in the external service."),
        NodeProperty::string("category", "Product category").with_description("The category of the product."),
        NodeProperty::string("sku", "SKU").with_description("The SKU for the product."),
        NodeProperty::string("description", "Description").with_description("The description of the product."),
        NodeProperty::string("imageUrl", "Image URL").with_description("An Image URL that displays an image of the product."),
        NodeProperty::string("productUrl", "Product URL").with_description("A URL linking to the product in your store."),
    ]
}

fn order_fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::number("shippingAmount", "Shipping Amount").with_description("The total shipping amount for the order in cents ."),
        NodeProperty::number("taxAmount", "Tax Amount").with_description("The total tax amount for the order in cents."),
        NodeProperty::number("discountAmount", "Discount Amount").with_description("The total discount amount for the order in cents."),
        NodeProperty::string("orderUrl", "Order URL").with_description("The URL for the order in the external service."),
        NodeProperty::date_time("externalupdatedDate", "External updated date").with_description("The date the order was updated."),
        NodeProperty::string("shippingMethod", "Shipping Method").with_description("The shipping method of the order."),
        NodeProperty::string("orderNumber", "Order Number").with_description("The order number. This can be different than the externalid."),
    ]
}

fn record(params: &ItemParams<'_>) -> Result<String> {
    Ok(format!("/api/3/ecomOrders/{}", params.id("orderId")?))
}

/// Products as a list; accepts a bare list, `{product: [...]}` or one product object
fn order_products(params: &ItemParams<'_>) -> Result<Value> {
    match params.value("orderProducts") {
        None => Ok(json!([])),
        Some(Value::Array(products)) => Ok(Value::Array(products)),
        Some(Value::Object(mut obj)) => match obj.remove("product") {
            Some(products @ Value::Array(_)) => Ok(products),
            Some(other) => {
                obj.insert("product".to_string(), other);
                Ok(json!([obj]))
            }
            None if obj.is_empty() => Ok(json!([])),
            None => Ok(json!([obj])),
        },
        Some(_) => Err(Error::invalid_parameter("orderProducts", params.item(), "a list of products")),
    }
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::Create => {
            let mut order = Map::new();
            order.insert("source".to_string(), json!(params.string("source")?));
            order.insert("email".to_string(), json!(params.string("email")?));
            order.insert("totalPrice".to_string(), params.number("totalPrice")?);
            order.insert("currency".to_string(), json!(params.string("currency")?.to_uppercase()));
            order.insert("externalCreatedDate".to_string(), json!(params.string("externalCreatedDate")?));
            order.insert("connectionid".to_string(), params.number("connectionid")?);
            order.insert("customerid".to_string(), params.number("customerid")?);

            for key in ["externalid", "externalcheckoutid", "abandonedDate"] {
                if let Some(value) = params.optional_string(key)? {
                    order.insert(key.to_string(), json!(value));
                }
            }
            order.insert("orderProducts".to_string(), order_products(params)?);
            add_additional_fields(&mut order, &params.object("additionalFields")?);

            ApiCall::post("/api/3/ecomOrders").with_body("ecomOrder", order)
        }
        Operation::Delete => ApiCall::delete(record(params)?),
        Operation::Get => ApiCall::get(record(params)?),
        Operation::GetAll => return PreparedCall::list("/api/3/ecomOrders", "ecomOrders", params),
        Operation::Update => {
            let mut order = Map::new();
            add_additional_fields(&mut order, &params.object("updateFields")?);
            ApiCall::put(record(params)?).with_body("ecomOrder", order)
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
