//! ecommerceCustomer: customers of a connected store

use ac_api::ApiCall;
use ac_core::{Error, Result};
use serde_json::{json, Map};

use super::fields::{add_additional_fields, coerce_accepts_marketing};
use super::metadata::{id_property, operation_option, operation_property, return_all_properties, shown};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::NodeProperty;

const RESOURCE: Resource = Resource::EcommerceCustomer;

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Create", Create, "Create a ecommerce customer"),
                operation_option("Delete", Delete, "Delete a ecommerce customer"),
                operation_option("Get", Get, "Get data of a ecommerce customer"),
                operation_option("Get All", GetAll, "Get data of all ecommerce customer"),
                operation_option("Update", Update, "Update a ecommerce customer"),
            ],
            Create,
        ),
        shown(
            NodeProperty::string("connectionid", "Service ID")
                .required()
                .with_description("The id of the connection object for the service where the customer originates."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("externalid", "Customer ID")
                .required()
                .with_description("The id of the customer in the external service."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("email", "Customer Email")
                .required()
                .with_description("The email address of the customer."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::collection("additionalFields", "Additional Fields", vec![accepts_marketing()]),
            RESOURCE,
            &[Create],
        ),
        id_property(
            "ecommerceCustomerId",
            "Customer ID",
            RESOURCE,
            &[Delete, Get, Update],
            "ID of the E-commerce customer",
        ),
    ];
    properties.extend(return_all_properties(RESOURCE));

    properties.push(shown(
        NodeProperty::collection(
            "updateFields",
            "Update Fields",
            vec![
                NodeProperty::string("connectionid", "Service ID")
                    .with_description("The id of the connection object for the service where the customer originates."),
                NodeProperty::string("externalid", "Customer ID")
                    .with_description("The id of the customer in the external service."),
                NodeProperty::string("email", "Customer Email").with_description("The email address of the customer."),
                accepts_marketing(),
            ],
        )
        .with_description("The fields to update."),
        RESOURCE,
        &[Update],
    ));
    properties
}

fn accepts_marketing() -> NodeProperty {
    NodeProperty::boolean("acceptsMarketing", "Accepts Marketing")
        .with_description("Indication of whether customer has opt-ed in to marketing communications.")
}

fn record(params: &ItemParams<'_>) -> Result<String> {
    Ok(format!("/api/3/ecomCustomers/{}", params.id("ecommerceCustomerId")?))
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::Create => {
            let mut customer = Map::new();
            for key in ["connectionid", "externalid", "email"] {
                customer.insert(key.to_string(), json!(params.string(key)?));
            }
            let mut additional = params.object("additionalFields")?;
            coerce_accepts_marketing(&mut additional);
            add_additional_fields(&mut customer, &additional);
            ApiCall::post("/api/3/ecomCustomers").with_body("ecomCustomer", customer)
        }
        Operation::Delete => ApiCall::delete(record(params)?),
        Operation::Get => ApiCall::get(record(params)?),
        Operation::GetAll => return PreparedCall::list("/api/3/ecomCustomers", "ecomCustomers", params),
        Operation::Update => {
            let mut customer = Map::new();
            let mut updates = params.object("updateFields")?;
            coerce_accepts_marketing(&mut updates);
            add_additional_fields(&mut customer, &updates);
            ApiCall::put(record(params)?).with_body("ecomCustomer", customer)
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
