use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An active ticket as returned by the API. `is_active` is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: i32,
    pub event_name: String,
    pub user_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.99)]
    pub amount: Decimal,
    pub ticket_date: String,
}

/// Request body for creating a ticket or replacing all of its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketCreate {
    pub event_name: String,
    pub user_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.99)]
    pub amount: Decimal,
    pub ticket_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amount_is_a_json_number() {
        let ticket = Ticket {
            id: 7,
            event_name: "Concert".into(),
            user_id: 1,
            amount: Decimal::new(4999, 2),
            ticket_date: "2024-05-01".into(),
        };

        assert_eq!(
            serde_json::to_value(&ticket).unwrap(),
            json!({
                "id": 7,
                "event_name": "Concert",
                "user_id": 1,
                "amount": 49.99,
                "ticket_date": "2024-05-01"
            })
        );
    }

    #[test]
    fn create_accepts_integer_and_float_amounts() {
        let create: TicketCreate = serde_json::from_value(json!({
            "event_name": "Concert",
            "user_id": 1,
            "amount": 49.99,
            "ticket_date": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(create.amount, Decimal::new(4999, 2));

        let create: TicketCreate = serde_json::from_value(json!({
            "event_name": "Match",
            "user_id": 2,
            "amount": 20,
            "ticket_date": "2024-06-01"
        }))
        .unwrap();
        assert_eq!(create.amount, Decimal::new(20, 0));
    }

    #[test]
    fn create_requires_every_field() {
        let result = serde_json::from_value::<TicketCreate>(json!({
            "event_name": "Concert",
            "user_id": 1,
            "ticket_date": "2024-05-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_wrong_types() {
        let result = serde_json::from_value::<TicketCreate>(json!({
            "event_name": "Concert",
            "user_id": "one",
            "amount": 49.99,
            "ticket_date": "2024-05-01"
        }));
        assert!(result.is_err());
    }
}
