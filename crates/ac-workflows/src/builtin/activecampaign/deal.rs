//! deal: CRUD plus notes

use ac_api::ApiCall;
use ac_core::{Error, Result};
use serde_json::{json, Map, Value};

use super::fields::add_additional_fields;
use super::metadata::{currency_property, id_property, operation_option, operation_property, return_all_properties, shown};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::NodeProperty;

const RESOURCE: Resource = Resource::Deal;

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Create", Create, "Create a deal"),
                operation_option("Delete", Delete, "Delete a deal"),
                operation_option("Get", Get, "Get data of a deal"),
                operation_option("Get All", GetAll, "Get data of all deals"),
                operation_option("Update", Update, "Update a deal"),
                operation_option("Create Note", CreateNote, "Create a deal note"),
                operation_option("Update Note", UpdateNote, "Update a deal note"),
            ],
            Create,
        ),
        shown(
            NodeProperty::string("title", "Title").required().with_description("The title of the deal"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("contact", "Deal's contact ID")
                .required()
                .with_description("The ID of the deal's contact"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::number("value", "Deal value")
                .required()
                .with_description("The value of the deal in cents"),
            RESOURCE,
            &[Create],
        ),
        shown(currency_property("currency").required(), RESOURCE, &[Create]),
        shown(
            NodeProperty::string("group", "Deal pipeline ID").with_description("The pipeline ID of the deal"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("stage", "Deal stage ID").with_description("The stage ID of the deal"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::string("owner", "Deal owner ID").with_description("The owner ID of the deal"),
            RESOURCE,
            &[Create],
        ),
        shown(
            NodeProperty::collection("additionalFields", "Additional Fields", deal_fields()),
            RESOURCE,
            &[Create],
        ),
        id_property(
            "dealId",
            "Deal ID",
            RESOURCE,
            &[Delete, Get, Update, CreateNote, UpdateNote],
            "ID of the deal",
        ),
        shown(
            NodeProperty::string("dealNote", "Deal Note").required().with_description("The content of the deal note"),
            RESOURCE,
            &[CreateNote, UpdateNote],
        ),
        id_property("dealNoteId", "Deal Note ID", RESOURCE, &[UpdateNote], "The ID of the deal note"),
    ];
    properties.extend(return_all_properties(RESOURCE));

    let mut update_fields = vec![
        NodeProperty::string("title", "Title").with_description("The title of the deal"),
        NodeProperty::string("contact", "Deal's contact ID").with_description("The ID of the deal's contact"),
        NodeProperty::number("value", "Deal value").with_description("The value of the deal in cents"),
        currency_property("currency"),
        NodeProperty::string("group", "Deal pipeline ID").with_description("The pipeline ID of the deal"),
        NodeProperty::string("stage", "Deal stage ID").with_description("The stage ID of the deal"),
        NodeProperty::string("owner", "Deal owner ID").with_description("The owner ID of the deal"),
    ];
    update_fields.extend(deal_fields());
    properties.push(shown(
        NodeProperty::collection("updateFields", "Update Fields", update_fields)
            .with_description("The fields to update."),
        RESOURCE,
        &[Update],
    ));
    properties
}

fn deal_fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::string("description", "Description").with_description("The description of the deal"),
        NodeProperty::number("percentage", "Deal percentage").with_description("The percentage of the deal"),
        NodeProperty::number("status", "Deal status").with_description("The status of the deal"),
    ]
}

fn record(params: &ItemParams<'_>) -> Result<String> {
    Ok(format!("/api/3/deals/{}", params.id("dealId")?))
}

fn note_body(params: &ItemParams<'_>) -> Result<Map<String, Value>> {
    let mut note = Map::new();
    note.insert("note".to_string(), json!(params.string("dealNote")?));
    Ok(note)
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::Create => {
            let mut deal = Map::new();
            deal.insert("title".to_string(), json!(params.string("title")?));
            deal.insert("contact".to_string(), json!(params.string("contact")?));
            deal.insert("value".to_string(), params.number("value")?);
            deal.insert("currency".to_string(), json!(params.string("currency")?));

            for key in ["group", "owner", "stage"] {
                if let Some(value) = params.optional_string(key)? {
                    deal.insert(key.to_string(), json!(value));
                }
            }
            add_additional_fields(&mut deal, &params.object("additionalFields")?);

            ApiCall::post("/api/3/deals").with_body("deal", deal)
        }
        Operation::Delete => ApiCall::delete(record(params)?),
        Operation::Get => ApiCall::get(record(params)?),
        Operation::GetAll => return PreparedCall::list("/api/3/deals", "deals", params),
        Operation::Update => {
            let mut deal = Map::new();
            add_additional_fields(&mut deal, &params.object("updateFields")?);
            ApiCall::put(record(params)?).with_body("deal", deal)
        }
        Operation::CreateNote => ApiCall::post(format!("{}/notes", record(params)?))
            .with_body("note", note_body(params)?),
        Operation::UpdateNote => {
            let endpoint = format!("{}/notes/{}", record(params)?, params.id("dealNoteId")?);
            ApiCall::put(endpoint).with_body("note", note_body(params)?)
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
