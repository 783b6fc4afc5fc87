//! contact: create (or sync), get, getAll, update, delete

use ac_api::ApiCall;
use ac_core::{Error, Result};
use serde_json::{json, Map};

use super::fields::add_additional_fields;
use super::metadata::{custom_properties, id_property, operation_option, operation_property, return_all_properties, shown};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::NodeProperty;

const RESOURCE: Resource = Resource::Contact;

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Create", Create, "Create a contact"),
                operation_option("Delete", Delete, "Delete a contact"),
                operation_option("Get", Get, "Get data of a contact"),
                operation_option("Get All", GetAll, "Get data of all contact"),
                operation_option("Update", Update, "Update a contact"),
            ],
            Create,
        ),
        shown(
            NodeProperty::string("email", "Email")
                .required()
                .with_description("The email of the contact to create"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::boolean("updateIfExists", "Update if exists")
                .with_description("Update user if it exists already. If not set and user exists it will error instead."),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::collection("additionalFields", "Additional Fields", contact_fields()),
            RESOURCE,
            &[Create],
        ),
        id_property("contactId", "Contact ID", RESOURCE, &[Delete, Get, Update], "ID of the contact"),
    ];
    properties.extend(return_all_properties(RESOURCE));

    let mut update_fields = vec![NodeProperty::string("email", "Email").with_description("Email of the contact")];
    update_fields.extend(contact_fields());
    properties.push(shown(
        NodeProperty::collection("updateFields", "Update Fields", update_fields)
            .with_description("The fields to update."),
        RESOURCE,
        &[Update],
    ));
    properties
}

fn contact_fields() -> Vec<NodeProperty> {
    vec![
        custom_properties(),
        NodeProperty::string("firstName", "First Name").with_description("The first name of the contact"),
        NodeProperty::string("lastName", "Last Name").with_description("The last name of the contact"),
        NodeProperty::string("phone", "Phone").with_description("Phone number of the contact"),
    ]
}

fn record(params: &ItemParams<'_>) -> Result<String> {
    Ok(format!("/api/3/contacts/{}", params.id("contactId")?))
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::Create => {
            let endpoint = if params.boolean("updateIfExists")? {
                "/api/3/contact/sync"
            } else {
                "/api/3/contacts"
            };
            let mut contact = Map::new();
            contact.insert("email".to_string(), json!(params.string("email")?));
            add_additional_fields(&mut contact, &params.object("additionalFields")?);
            ApiCall::post(endpoint)
                .with_body("contact", contact)
                .with_data_key("contact")
        }
        Operation::Delete => ApiCall::delete(record(params)?),
        Operation::Get => ApiCall::get(record(params)?),
        Operation::GetAll => return PreparedCall::list("/api/3/contacts", "contacts", params),
        Operation::Update => {
            let mut contact = Map::new();
            add_additional_fields(&mut contact, &params.object("updateFields")?);
            ApiCall::put(record(params)?)
                .with_body("contact", contact)
                .with_data_key("contact")
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
