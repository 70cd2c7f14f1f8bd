#[cfg(test)]
mod tests {
    use crate::types::*;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new("s1");
        assert_eq!(id.to_string(), "s1");
        assert_eq!(id.as_str(), "s1");
    }

    #[test]
    fn subscription_ids_order_lexically() {
        let mut ids = vec![
            SubscriptionId::new("s2"),
            SubscriptionId::new("s10"),
            SubscriptionId::new("s1"),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "s1");
        assert_eq!(ids[1].as_str(), "s10");
        assert_eq!(ids[2].as_str(), "s2");
    }

    #[test]
    fn matrix_entry_wire_names() {
        let entry = MatrixEntry {
            subscription_id: SubscriptionId::new("s1"),
            subscription_name: "Prod".into(),
            service_connection: "spn-a".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["subscriptionId"], "s1");
        assert_eq!(json["subscriptionName"], "Prod");
        assert_eq!(json["serviceConnection"], "spn-a");
    }

    #[test]
    fn matrix_serializes_in_key_order() {
        let mut matrix = Matrix::new();
        matrix.insert(
            "zeta".into(),
            MatrixEntry {
                subscription_id: SubscriptionId::new("s2"),
                subscription_name: "Zeta".into(),
                service_connection: "spn".into(),
            },
        );
        matrix.insert(
            "alpha".into(),
            MatrixEntry {
                subscription_id: SubscriptionId::new("s1"),
                subscription_name: "Alpha".into(),
                service_connection: "spn".into(),
            },
        );
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.find("alpha").unwrap() < json.find("zeta").unwrap());
    }
}
