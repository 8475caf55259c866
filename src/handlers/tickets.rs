use axum::extract::State;
use axum::response::Response;

use crate::db::{Database, TicketRepo};
use crate::models::{Ticket, TicketCreate};
use crate::utils::error::AppError;
use crate::utils::extract::{Json, Path};
use crate::utils::response::no_content;

#[utoipa::path(
    get,
    path = "/tickets",
    tag = "tickets",
    responses((status = 200, description = "Active tickets", body = [Ticket]))
)]
pub async fn list_tickets(State(db): State<Database>) -> Result<Json<Vec<Ticket>>, AppError> {
    let tickets: Vec<Ticket> = db
        .transaction(|tx| {
            Box::pin(async move { TicketRepo::new(tx).list_active().await })
        })
        .await?;

    Ok(Json(tickets))
}

#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "The ticket", body = Ticket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Ticket>, AppError> {
    let ticket: Option<Ticket> = db
        .transaction(move |tx| {
            Box::pin(async move { TicketRepo::new(tx).find_active(id).await })
        })
        .await?;

    ticket.map(Json).ok_or_else(AppError::ticket_not_found)
}

#[utoipa::path(
    post,
    path = "/tickets",
    tag = "tickets",
    request_body = TicketCreate,
    responses(
        (status = 200, description = "Stored ticket with its assigned id", body = Ticket),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_ticket(
    State(db): State<Database>,
    Json(ticket): Json<TicketCreate>,
) -> Result<Json<Ticket>, AppError> {
    let created: Ticket = db
        .transaction(move |tx| {
            Box::pin(async move { TicketRepo::new(tx).insert(&ticket).await })
        })
        .await?;

    tracing::info!(ticket_id = created.id, "Ticket created");
    Ok(Json(created))
}

#[utoipa::path(
    put,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i32, Path, description = "Ticket id")),
    request_body = TicketCreate,
    responses(
        (status = 200, description = "Updated ticket", body = Ticket),
        (status = 404, description = "Ticket not found"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn update_ticket(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(ticket): Json<TicketCreate>,
) -> Result<Json<Ticket>, AppError> {
    let updated: Option<Ticket> = db
        .transaction(move |tx| {
            Box::pin(async move { TicketRepo::new(tx).update(id, &ticket).await })
        })
        .await?;

    let updated = updated.ok_or_else(AppError::ticket_not_found)?;
    tracing::info!(ticket_id = id, "Ticket updated");
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 204, description = "Ticket deactivated"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn delete_ticket(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let deactivated: bool = db
        .transaction(move |tx| {
            Box::pin(async move { TicketRepo::new(tx).deactivate(id).await })
        })
        .await?;

    if !deactivated {
        return Err(AppError::ticket_not_found());
    }

    tracing::info!(ticket_id = id, "Ticket deactivated");
    Ok(no_content())
}
