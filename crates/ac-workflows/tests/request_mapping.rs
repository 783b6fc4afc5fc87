//! (resource, operation) → method, endpoint, body, data key

mod common;

#[cfg(test)]
mod tests {
    use super::common::prepare;
    use ac_api::HttpMethod;
    use ac_core::Error;
    use serde_json::{json, Value};

    fn body(prepared: &ac_workflows::builtin::activecampaign::PreparedCall) -> Value {
        Value::Object(prepared.call.body.clone())
    }

    // ----------------------------------
    //         contact
    // ----------------------------------

    #[test]
    fn test_contact_create() {
        let prepared = prepare(json!({
            "resource": "contact",
            "operation": "create",
            "email": "jane@example.com",
            "additionalFields": {"firstName": "Jane", "phone": "555-0100"}
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Post);
        assert_eq!(prepared.call.endpoint, "/api/3/contacts");
        assert_eq!(
            body(&prepared),
            json!({"contact": {"email": "jane@example.com", "firstName": "Jane", "phone": "555-0100"}})
        );
        assert_eq!(prepared.call.data_key.as_deref(), Some("contact"));
        assert!(!prepared.return_all);
    }

    #[test]
    fn test_contact_create_sync_when_update_if_exists() {
        let prepared = prepare(json!({
            "resource": "contact",
            "operation": "create",
            "email": "jane@example.com",
            "updateIfExists": true
        }))
        .unwrap();

        assert_eq!(prepared.call.endpoint, "/api/3/contact/sync");
        assert_eq!(body(&prepared), json!({"contact": {"email": "jane@example.com"}}));
    }

    #[test]
    fn test_contact_create_custom_properties() {
        let prepared = prepare(json!({
            "resource": "contact",
            "operation": "create",
            "email": "jane@example.com",
            "additionalFields": {
                "customProperties": {"property": [{"name": "orgname", "value": "Acme"}]}
            }
        }))
        .unwrap();

        assert_eq!(
            body(&prepared),
            json!({"contact": {"email": "jane@example.com", "orgname": "Acme"}})
        );
    }

    #[test]
    fn test_contact_get_delete_update() {
        let get = prepare(json!({"resource": "contact", "operation": "get", "contactId": 12})).unwrap();
        assert_eq!(get.call.method, HttpMethod::Get);
        assert_eq!(get.call.endpoint, "/api/3/contacts/12");
        assert!(get.call.body.is_empty());
        assert_eq!(get.call.data_key, None);

        let delete = prepare(json!({"resource": "contact", "operation": "delete", "contactId": "12"})).unwrap();
        assert_eq!(delete.call.method, HttpMethod::Delete);
        assert_eq!(delete.call.endpoint, "/api/3/contacts/12");
        assert_eq!(delete.call.data_key, None);

        let update = prepare(json!({
            "resource": "contact",
            "operation": "update",
            "contactId": 12,
            "updateFields": {"lastName": "Doe"}
        }))
        .unwrap();
        assert_eq!(update.call.method, HttpMethod::Put);
        assert_eq!(update.call.endpoint, "/api/3/contacts/12");
        assert_eq!(body(&update), json!({"contact": {"lastName": "Doe"}}));
        assert_eq!(update.call.data_key.as_deref(), Some("contact"));
    }

    #[test]
    fn test_contact_get_all_with_limit() {
        let prepared = prepare(json!({
            "resource": "contact",
            "operation": "getAll",
            "limit": 25
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Get);
        assert_eq!(prepared.call.endpoint, "/api/3/contacts");
        assert_eq!(Value::Object(prepared.call.query.clone()), json!({"limit": 25}));
        assert_eq!(prepared.call.data_key.as_deref(), Some("contacts"));
        assert!(!prepared.return_all);
    }

    #[test]
    fn test_get_all_default_limit_and_return_all() {
        let defaulted = prepare(json!({"resource": "deal", "operation": "getAll"})).unwrap();
        assert_eq!(defaulted.call.query["limit"], 100);

        let all = prepare(json!({"resource": "deal", "operation": "getAll", "returnAll": true, "limit": 5})).unwrap();
        assert!(all.return_all);
        assert!(all.call.query.is_empty());
        assert_eq!(all.call.data_key.as_deref(), Some("deals"));
    }

    // ----------------------------------
    //         deal
    // ----------------------------------

    #[test]
    fn test_deal_create() {
        let prepared = prepare(json!({
            "resource": "deal",
            "operation": "create",
            "title": "Big deal",
            "contact": "51",
            "value": 45000,
            "currency": "usd",
            "group": "1",
            "owner": "",
            "stage": "3",
            "additionalFields": {"description": "Renewal", "percentage": 50}
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Post);
        assert_eq!(prepared.call.endpoint, "/api/3/deals");
        assert_eq!(
            body(&prepared),
            json!({"deal": {
                "title": "Big deal",
                "contact": "51",
                "value": 45000,
                "currency": "usd",
                "group": "1",
                "stage": "3",
                "description": "Renewal",
                "percentage": 50
            }})
        );
        assert_eq!(prepared.call.data_key, None);
    }

    #[test]
    fn test_deal_create_defaults_currency() {
        let prepared = prepare(json!({
            "resource": "deal",
            "operation": "create",
            "title": "Small deal",
            "contact": "51",
            "value": 100
        }))
        .unwrap();

        let deal = prepared.call.body_object("deal").unwrap();
        assert_eq!(deal["currency"], "eur");
        assert!(!deal.contains_key("group"));
        assert!(!deal.contains_key("owner"));
    }

    #[test]
    fn test_deal_update_and_delete() {
        let update = prepare(json!({
            "resource": "deal",
            "operation": "update",
            "dealId": 9,
            "updateFields": {"title": "Renamed", "status": 1}
        }))
        .unwrap();
        assert_eq!(update.call.method, HttpMethod::Put);
        assert_eq!(update.call.endpoint, "/api/3/deals/9");
        assert_eq!(body(&update), json!({"deal": {"title": "Renamed", "status": 1}}));

        let delete = prepare(json!({"resource": "deal", "operation": "delete", "dealId": 9})).unwrap();
        assert_eq!(delete.call.method, HttpMethod::Delete);
        assert_eq!(delete.call.endpoint, "/api/3/deals/9");
    }

    #[test]
    fn test_deal_notes() {
        let create = prepare(json!({
            "resource": "deal",
            "operation": "createNote",
            "dealId": 9,
            "dealNote": "Called the customer"
        }))
        .unwrap();
        assert_eq!(create.call.method, HttpMethod::Post);
        assert_eq!(create.call.endpoint, "/api/3/deals/9/notes");
        assert_eq!(body(&create), json!({"note": {"note": "Called the customer"}}));
        assert_eq!(create.call.data_key, None);

        let update = prepare(json!({
            "resource": "deal",
            "operation": "updateNote",
            "dealId": 9,
            "dealNoteId": 4,
            "dealNote": "Called twice"
        }))
        .unwrap();
        assert_eq!(update.call.method, HttpMethod::Put);
        assert_eq!(update.call.endpoint, "/api/3/deals/9/notes/4");
        assert_eq!(body(&update), json!({"note": {"note": "Called twice"}}));
    }

    // ----------------------------------
    //         connection
    // ----------------------------------

    #[test]
    fn test_connection_create() {
        let prepared = prepare(json!({
            "resource": "connection",
            "operation": "create",
            "service": "shop",
            "externalid": "store-1",
            "name": "My Toystore, Inc.",
            "logoUrl": "https://example.com/logo.png",
            "linkUrl": "https://example.com/manage"
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Post);
        assert_eq!(prepared.call.endpoint, "/api/3/connections");
        assert_eq!(
            body(&prepared),
            json!({"connection": {
                "service": "shop",
                "externalid": "store-1",
                "name": "My Toystore, Inc.",
                "logoUrl": "https://example.com/logo.png",
                "linkUrl": "https://example.com/manage"
            }})
        );
    }

    #[test]
    fn test_connection_record_operations() {
        let get = prepare(json!({"resource": "connection", "operation": "get", "connectionId": 3})).unwrap();
        assert_eq!(get.call.endpoint, "/api/3/connections/3");
        assert_eq!(get.call.data_key, None);

        let update = prepare(json!({
            "resource": "connection",
            "operation": "update",
            "connectionId": 3,
            "updateFields": {"syncStatus": 1}
        }))
        .unwrap();
        assert_eq!(update.call.method, HttpMethod::Put);
        assert_eq!(body(&update), json!({"connection": {"syncStatus": 1}}));

        let list = prepare(json!({"resource": "connection", "operation": "getAll", "limit": 10})).unwrap();
        assert_eq!(list.call.endpoint, "/api/3/connections");
        assert_eq!(list.call.data_key.as_deref(), Some("connections"));
    }

    // ----------------------------------
    //         ecommerceOrder
    // ----------------------------------

    #[test]
    fn test_ecommerce_order_create() {
        let prepared = prepare(json!({
            "resource": "ecommerceOrder",
            "operation": "create",
            "source": "1",
            "email": "buyer@example.com",
            "totalPrice": 45678,
            "currency": "usd",
            "externalCreatedDate": "2026-01-02T10:00:00Z",
            "connectionid": 1,
            "customerid": 2,
            "externalid": "order-77",
            "externalcheckoutid": "",
            "orderProducts": [{"name": "Toy", "price": 45678, "quantity": 1}],
            "additionalFields": {"orderNumber": "A-77"}
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Post);
        assert_eq!(prepared.call.endpoint, "/api/3/ecomOrders");
        assert_eq!(
            body(&prepared),
            json!({"ecomOrder": {
                "source": "1",
                "email": "buyer@example.com",
                "totalPrice": 45678,
                "currency": "USD",
                "externalCreatedDate": "2026-01-02T10:00:00Z",
                "connectionid": 1,
                "customerid": 2,
                "externalid": "order-77",
                "orderProducts": [{"name": "Toy", "price": 45678, "quantity": 1}],
                "orderNumber": "A-77"
            }})
        );
        assert_eq!(prepared.call.data_key, None);
    }

    #[test]
    fn test_ecommerce_order_products_collection_shape() {
        let prepared = prepare(json!({
            "resource": "ecommerceOrder",
            "operation": "create",
            "email": "buyer@example.com",
            "totalPrice": 100,
            "externalCreatedDate": "2026-01-02",
            "connectionid": 1,
            "customerid": 2,
            "abandonedDate": "2026-01-03",
            "orderProducts": {"product": [{"name": "A"}, {"name": "B"}]}
        }))
        .unwrap();

        let order = prepared.call.body_object("ecomOrder").unwrap();
        assert_eq!(order["orderProducts"], json!([{"name": "A"}, {"name": "B"}]));
        assert_eq!(order["abandonedDate"], "2026-01-03");
        assert_eq!(order["currency"], "EUR");
        assert_eq!(order["source"], "1");
    }

    #[test]
    fn test_ecommerce_order_record_operations() {
        for (operation, method) in [
            ("get", HttpMethod::Get),
            ("delete", HttpMethod::Delete),
            ("update", HttpMethod::Put),
        ] {
            let prepared = prepare(json!({
                "resource": "ecommerceOrder",
                "operation": operation,
                "orderId": 88
            }))
            .unwrap();
            assert_eq!(prepared.call.method, method);
            assert_eq!(prepared.call.endpoint, "/api/3/ecomOrders/88");
        }

        let list = prepare(json!({"resource": "ecommerceOrder", "operation": "getAll", "returnAll": true})).unwrap();
        assert!(list.return_all);
        assert_eq!(list.call.data_key.as_deref(), Some("ecomOrders"));
    }

    // ----------------------------------
    //         ecommerceCustomer
    // ----------------------------------

    #[test]
    fn test_ecommerce_customer_create_accepts_marketing() {
        let prepared = prepare(json!({
            "resource": "ecommerceCustomer",
            "operation": "create",
            "connectionid": "1",
            "externalid": "cust-1",
            "email": "buyer@example.com",
            "additionalFields": {"acceptsMarketing": true}
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Post);
        assert_eq!(prepared.call.endpoint, "/api/3/ecomCustomers");
        assert_eq!(
            body(&prepared),
            json!({"ecomCustomer": {
                "connectionid": "1",
                "externalid": "cust-1",
                "email": "buyer@example.com",
                "acceptsMarketing": "1"
            }})
        );
    }

    #[test]
    fn test_ecommerce_customer_update_declines_marketing() {
        let prepared = prepare(json!({
            "resource": "ecommerceCustomer",
            "operation": "update",
            "ecommerceCustomerId": 5,
            "updateFields": {"acceptsMarketing": false, "email": "new@example.com"}
        }))
        .unwrap();

        assert_eq!(prepared.call.method, HttpMethod::Put);
        assert_eq!(prepared.call.endpoint, "/api/3/ecomCustomers/5");
        assert_eq!(
            body(&prepared),
            json!({"ecomCustomer": {"acceptsMarketing": "0", "email": "new@example.com"}})
        );
    }

    #[test]
    fn test_ecommerce_customer_without_flag() {
        let prepared = prepare(json!({
            "resource": "ecommerceCustomer",
            "operation": "update",
            "ecommerceCustomerId": 5,
            "updateFields": {"externalid": "cust-2"}
        }))
        .unwrap();
        assert_eq!(body(&prepared), json!({"ecomCustomer": {"externalid": "cust-2"}}));
    }

    // ----------------------------------
    //         ecommerceOrderProducts
    // ----------------------------------

    #[test]
    fn test_ecommerce_order_products() {
        let by_product = prepare(json!({
            "resource": "ecommerceOrderProducts",
            "operation": "getByProductId",
            "productId": 31
        }))
        .unwrap();
        assert_eq!(by_product.call.method, HttpMethod::Get);
        assert_eq!(by_product.call.endpoint, "/api/3/ecomOrderProducts/31");
        assert_eq!(by_product.call.data_key, None);

        let by_order = prepare(json!({
            "resource": "ecommerceOrderProducts",
            "operation": "getByOrderId",
            "orderId": 88
        }))
        .unwrap();
        assert_eq!(by_order.call.endpoint, "/api/3/ecomOrders/88/orderProducts");
        assert_eq!(by_order.call.data_key, None);

        let all = prepare(json!({"resource": "ecommerceOrderProducts", "operation": "getAll", "limit": 3})).unwrap();
        assert_eq!(all.call.endpoint, "/api/3/ecomOrderProducts");
        assert_eq!(all.call.query["limit"], 3);
    }

    #[test]
    fn test_operation_defaults_per_resource() {
        let prepared = prepare(json!({"resource": "ecommerceOrderProducts"})).unwrap();
        assert_eq!(prepared.call.endpoint, "/api/3/ecomOrderProducts");
    }

    // ----------------------------------
    //         failures
    // ----------------------------------

    #[test]
    fn test_unknown_resource() {
        let err = prepare(json!({"resource": "invoice", "operation": "get"})).unwrap_err();
        assert!(matches!(err, Error::UnknownResource(ref r) if r == "invoice"));
        assert_eq!(err.to_string(), "The resource \"invoice\" is not known!");
    }

    #[test]
    fn test_unknown_operation() {
        let err = prepare(json!({"resource": "contact", "operation": "createNote"})).unwrap_err();
        assert_eq!(err.to_string(), "The operation \"createNote\" is not known");

        let err = prepare(json!({"resource": "deal", "operation": "archive"})).unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(ref o) if o == "archive"));
    }

    #[test]
    fn test_missing_and_invalid_ids() {
        let err = prepare(json!({"resource": "deal", "operation": "get"})).unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref name, item: 0 } if name == "dealId"));

        let err = prepare(json!({"resource": "deal", "operation": "get", "dealId": "../users"})).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "dealId"));
    }
}
