//! connection: links an external e-commerce service to the account

use ac_api::ApiCall;
use ac_core::{Error, Result};
use serde_json::{json, Map};

use super::fields::add_additional_fields;
use super::metadata::{id_property, operation_option, operation_property, return_all_properties, shown};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::NodeProperty;

const RESOURCE: Resource = Resource::Connection;

/// Body fields of `create`, in request order
const CREATE_FIELDS: [&str; 5] = ["service", "externalid", "name", "logoUrl", "linkUrl"];

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Create", Create, "Create a connection"),
                operation_option("Delete", Delete, "Delete a connection"),
                operation_option("Get", Get, "Get data of a connection"),
                operation_option("Get All", GetAll, "Get data of all connections"),
                operation_option("Update", Update, "Update a connection"),
            ],
            Create,
        ),
    ];

    for property in connection_fields() {
        properties.push(shown(property.required(), RESOURCE, &[Create]));
    }

    properties.push(id_property(
        "connectionId",
        "Connection ID",
        RESOURCE,
        &[Delete, Get, Update],
        "ID of the connection",
    ));
    properties.extend(return_all_properties(RESOURCE));

    let mut update_fields = connection_fields();
    update_fields.push(
        NodeProperty::number("status", "Status").with_description("The status of the connection (0 = error; 1 = connected)"),
    );
    update_fields.push(
        NodeProperty::number("syncStatus", "Syncronisation Status")
            .with_description("The status of a sync triggered on the connection (0 = sync stopped; 1 = sync running)"),
    );
    properties.push(shown(
        NodeProperty::collection("updateFields", "Update Fields", update_fields)
            .with_description("The fields to update."),
        RESOURCE,
        &[Update],
    ));
    properties
}

fn connection_fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::string("service", "Service").with_description("The name of the service."),
        NodeProperty::string("externalid", "External accout ID")
            .with_description("The id of the account in the external service."),
        NodeProperty::string("name", "Account Name")
            .with_description("The name associated with the account in the external service. Often this will be a company name (e.g., \"My Toystore, Inc.\")."),
        NodeProperty::string("logoUrl", "Logo URL")
            .with_description("The URL to a logo image for the external service."),
        NodeProperty::string("linkUrl", "Link URL")
            .with_description("The URL to a page where the integration with the external service can be managed in the third-party's website."),
    ]
}

fn record(params: &ItemParams<'_>) -> Result<String> {
    Ok(format!("/api/3/connections/{}", params.id("connectionId")?))
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::Create => {
            let mut connection = Map::new();
            for key in CREATE_FIELDS {
                connection.insert(key.to_string(), json!(params.string(key)?));
            }
            ApiCall::post("/api/3/connections").with_body("connection", connection)
        }
        Operation::Delete => ApiCall::delete(record(params)?),
        Operation::Get => ApiCall::get(record(params)?),
        Operation::GetAll => return PreparedCall::list("/api/3/connections", "connections", params),
        Operation::Update => {
            let mut connection = Map::new();
            add_additional_fields(&mut connection, &params.object("updateFields")?);
            ApiCall::put(record(params)?).with_body("connection", connection)
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
