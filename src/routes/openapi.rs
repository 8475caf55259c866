use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{payments, tickets};
use crate::models::{Payment, PaymentCreate, Ticket, TicketCreate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ticketing API",
        description = "Event tickets and payments with soft deletion"
    ),
    paths(
        tickets::list_tickets,
        tickets::get_ticket,
        tickets::create_ticket,
        tickets::update_ticket,
        tickets::delete_ticket,
        payments::list_payments,
        payments::get_payment,
        payments::create_payment,
        payments::update_payment,
        payments::delete_payment,
    ),
    components(schemas(Ticket, TicketCreate, Payment, PaymentCreate)),
    tags(
        (name = "tickets", description = "Event tickets"),
        (name = "payments", description = "Ticket payments")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in ["/tickets", "/tickets/{id}", "/payments", "/payments/{id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(paths["/tickets/{id}"]["delete"]["responses"]
            .get("404")
            .is_some());
    }

    #[test]
    fn amounts_are_documented_as_numbers() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let ticket = &doc["components"]["schemas"]["Ticket"];
        assert_eq!(ticket["properties"]["amount"]["type"], "number");
        assert!(ticket["required"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("ticket_date")));
    }
}
