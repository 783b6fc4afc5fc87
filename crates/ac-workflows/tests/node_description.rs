//! Published node metadata

#[cfg(test)]
mod tests {
    use ac_workflows::builtin::activecampaign::{node_description, Resource};
    use ac_workflows::PropertyKind;
    use serde_json::json;

    #[test]
    fn test_every_resource_has_an_operation_selector() {
        let description = node_description();
        for resource in Resource::ALL {
            let operations: Vec<_> = description
                .properties_for(resource.as_str(), "")
                .into_iter()
                .filter(|p| p.name == "operation")
                .collect();
            assert_eq!(operations.len(), 1, "resource {}", resource);

            let offered: Vec<_> = operations[0].options.iter().map(|o| o.value.clone()).collect();
            for op in resource.operations() {
                assert!(offered.contains(&json!(op.as_str())), "{}:{}", resource, op);
            }
        }
    }

    #[test]
    fn test_contact_create_fields() {
        let description = node_description();
        let names: Vec<_> = description
            .properties_for("contact", "create")
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();

        assert!(names.contains(&"email"));
        assert!(names.contains(&"updateIfExists"));
        assert!(names.contains(&"additionalFields"));
        assert!(!names.contains(&"contactId"));
        assert!(!names.contains(&"updateFields"));
    }

    #[test]
    fn test_limit_hidden_when_returning_all() {
        let description = node_description();
        let lookup = |key: &str| match key {
            "resource" => Some(json!("deal")),
            "operation" => Some(json!("getAll")),
            "returnAll" => Some(json!(true)),
            _ => None,
        };
        let names: Vec<_> = description.visible_properties(&lookup).map(|p| p.name.clone()).collect();
        assert!(names.contains(&"returnAll".to_string()));
        assert!(!names.contains(&"limit".to_string()));
    }

    #[test]
    fn test_serializes_for_host() {
        let value = serde_json::to_value(node_description()).unwrap();
        assert_eq!(value["name"], "activeCampaign");
        assert_eq!(value["displayName"], "ActiveCampaign");
        assert_eq!(value["credentials"][0]["name"], "activeCampaignApi");
        assert_eq!(value["properties"][0]["name"], "resource");
        assert_eq!(value["properties"][0]["default"], "contact");
        assert_eq!(value["properties"][0]["options"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_custom_properties_are_fixed_collection() {
        let description = node_description();
        let additional = description
            .properties_for("contact", "create")
            .into_iter()
            .find(|p| p.name == "additionalFields")
            .unwrap();
        let custom = additional.fields.iter().find(|f| f.name == "customProperties").unwrap();
        assert_eq!(custom.kind, PropertyKind::FixedCollection);
        assert_eq!(custom.type_options, Some(json!({"multipleValues": true})));
    }
}
