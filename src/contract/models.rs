use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order data printed on a sales contract. Every field is required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SalesContractRequest {
    pub contract_no: String,
    pub date: String,
    /// Address lines of the consignee (first notify party)
    pub consignee: Vec<String>,
    /// Address lines of the second notify party
    pub notify_party: Vec<String>,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "contract_no": "SI/2021/045",
            "date": "12 May 2021",
            "consignee": ["SMART DRAGON LANKA PVT LTD", "COLOMBO, SRI LANKA"],
            "notify_party": ["DEVI GLOBAL HK LTD"],
            "product_name": "Yellow Maize",
            "quantity": "500 MT",
            "price": "USD 310/MT",
            "amount": "USD 155,000"
        }"#;

        let request: SalesContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.contract_no, "SI/2021/045");
        assert_eq!(request.consignee.len(), 2);
        assert_eq!(request.notify_party, vec!["DEVI GLOBAL HK LTD"]);
        assert_eq!(request.amount, "USD 155,000");
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{
            "contract_no": "SI/2021/045",
            "date": "12 May 2021",
            "consignee": [],
            "notify_party": [],
            "product_name": "Yellow Maize",
            "quantity": "500 MT",
            "price": "USD 310/MT"
        }"#;

        let err = serde_json::from_str::<SalesContractRequest>(json).unwrap_err();
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let json = r#"{
            "contract_no": "SI/2021/045",
            "date": "12 May 2021",
            "consignee": "not a list",
            "notify_party": [],
            "product_name": "Yellow Maize",
            "quantity": "500 MT",
            "price": "USD 310/MT",
            "amount": "USD 155,000"
        }"#;

        assert!(serde_json::from_str::<SalesContractRequest>(json).is_err());
    }
}
