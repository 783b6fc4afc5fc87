//! ecommerceOrderProducts: read-only views of ordered products

use ac_api::ApiCall;
use ac_core::{Error, Result};

use super::metadata::{id_property, operation_option, operation_property, return_all_properties};
use super::params::ItemParams;
use super::resource::{Operation, Resource};
use super::PreparedCall;
use crate::description::NodeProperty;

const RESOURCE: Resource = Resource::EcommerceOrderProducts;

pub(super) fn properties() -> Vec<NodeProperty> {
    use Operation::*;

    let mut properties = vec![
        operation_property(
            RESOURCE,
            vec![
                operation_option("Get All", GetAll, "Get data of all order products"),
                operation_option("Get by Product ID", GetByProductId, "Get data of a ordered product"),
                operation_option("Get by Order ID", GetByOrderId, "Get data of an order's products"),
            ],
            GetAll,
        ),
        id_property("productId", "Product ID", RESOURCE, &[GetByProductId], "The ID of the product you'd like returned."),
        id_property("orderId", "Order ID", RESOURCE, &[GetByOrderId], "The ID of the order whose products you'd like returned."),
    ];
    properties.extend(return_all_properties(RESOURCE));
    properties
}

pub(super) fn build(operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    let call = match operation {
        Operation::GetByProductId => {
            ApiCall::get(format!("/api/3/ecomOrderProducts/{}", params.id("productId")?))
        }
        Operation::GetByOrderId => {
            ApiCall::get(format!("/api/3/ecomOrders/{}/orderProducts", params.id("orderId")?))
        }
        Operation::GetAll => {
            return PreparedCall::list("/api/3/ecomOrderProducts", "ecomOrderProducts", params)
        }
        other => return Err(Error::unknown_operation(other.as_str())),
    };
    Ok(PreparedCall::single(call))
}
