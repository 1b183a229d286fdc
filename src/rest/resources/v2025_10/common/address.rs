//! Postal addresses.

use serde::{Deserialize, Serialize};

/// A billing, shipping or customer address.
///
/// The id, customer id and default flag are only present on addresses stored
/// on a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Province or state name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Two-letter ISO 3166-1 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let address = Address {
            address1: Some("123 Amoebobacterieae St".to_string()),
            city: Some("Ottawa".to_string()),
            country_code: Some("CA".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&address).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["city"], "Ottawa");
        assert!(object.get("latitude").is_none());
    }

    #[test]
    fn test_deserializes_shopify_payload() {
        let json = r#"{
            "first_name": "Bob",
            "address1": "Chestnut Street 92",
            "phone": "+1(502)-459-2181",
            "city": "Louisville",
            "zip": "40202",
            "province": "Kentucky",
            "country": "United States",
            "last_name": "Norman",
            "latitude": 45.41634,
            "longitude": -75.6868,
            "name": "Bob Norman",
            "country_code": "US",
            "province_code": "KY"
        }"#;

        let address: Address = serde_json::from_str(json).unwrap();

        assert_eq!(address.name.as_deref(), Some("Bob Norman"));
        assert_eq!(address.province_code.as_deref(), Some("KY"));
        assert!((address.latitude.unwrap() - 45.41634).abs() < 1e-9);
        assert!(address.id.is_none());
    }
}
