use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.99)]
    pub amount: Decimal,
    pub currency: String,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentCreate {
    pub user_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.99)]
    pub amount: Decimal,
    pub currency: String,
    pub payment_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn payment_date_is_rfc3339() {
        let create: PaymentCreate = serde_json::from_value(json!({
            "user_id": 3,
            "amount": 120.5,
            "currency": "EUR",
            "payment_date": "2024-05-01T10:30:00+02:00"
        }))
        .unwrap();

        assert_eq!(
            create.payment_date,
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
        );
        assert_eq!(create.amount, Decimal::new(1205, 1));
    }

    #[test]
    fn rejects_unparseable_date() {
        let result = serde_json::from_value::<PaymentCreate>(json!({
            "user_id": 3,
            "amount": 1,
            "currency": "EUR",
            "payment_date": "yesterday"
        }));
        assert!(result.is_err());
    }
}
