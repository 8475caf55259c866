use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::{Database, PaymentRepo};
use crate::models::{Payment, PaymentCreate};
use crate::utils::error::AppError;
use crate::utils::extract::{Json, Path};
use crate::utils::response::no_content;

/// Lists active payments, answering `204 No Content` when there are none.
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Active payments", body = [Payment]),
        (status = 204, description = "No active payments")
    )
)]
pub async fn list_payments(State(db): State<Database>) -> Result<Response, AppError> {
    let payments: Vec<Payment> = db
        .transaction(|tx| {
            Box::pin(async move { PaymentRepo::new(tx).list_active().await })
        })
        .await?;

    if payments.is_empty() {
        return Ok(no_content());
    }

    Ok(Json(payments).into_response())
}

#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "payments",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "The payment", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Payment>, AppError> {
    let payment: Option<Payment> = db
        .transaction(move |tx| {
            Box::pin(async move { PaymentRepo::new(tx).find_active(id).await })
        })
        .await?;

    payment.map(Json).ok_or_else(AppError::payment_not_found)
}

#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = PaymentCreate,
    responses(
        (status = 201, description = "Stored payment", body = Payment),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_payment(
    State(db): State<Database>,
    Json(payment): Json<PaymentCreate>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let created: Payment = db
        .transaction(move |tx| {
            Box::pin(async move { PaymentRepo::new(tx).insert(&payment).await })
        })
        .await?;

    tracing::info!(payment_id = created.id, "Payment created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/payments/{id}",
    tag = "payments",
    params(("id" = i32, Path, description = "Payment id")),
    request_body = PaymentCreate,
    responses(
        (status = 200, description = "Updated payment", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn update_payment(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(payment): Json<PaymentCreate>,
) -> Result<Json<Payment>, AppError> {
    let updated: Option<Payment> = db
        .transaction(move |tx| {
            Box::pin(async move { PaymentRepo::new(tx).update(id, &payment).await })
        })
        .await?;

    updated.map(Json).ok_or_else(AppError::payment_not_found)
}

#[utoipa::path(
    delete,
    path = "/payments/{id}",
    tag = "payments",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 204, description = "Payment deactivated"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn delete_payment(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let deactivated: bool = db
        .transaction(move |tx| {
            Box::pin(async move { PaymentRepo::new(tx).deactivate(id).await })
        })
        .await?;

    if !deactivated {
        return Err(AppError::payment_not_found());
    }

    tracing::info!(payment_id = id, "Payment deactivated");
    Ok(no_content())
}
