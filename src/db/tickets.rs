//! Ticket statements. Every query filters on `is_active = true`, so a
//! deactivated row is invisible to the API even though it is never deleted.

use sqlx::PgConnection;

use crate::models::{Ticket, TicketCreate};

pub struct TicketRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TicketRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn list_active(&mut self) -> Result<Vec<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, event_name, user_id, amount, ticket_date
            FROM tickets
            WHERE is_active = true
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await
    }

    pub async fn find_active(&mut self, id: i32) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, event_name, user_id, amount, ticket_date
            FROM tickets
            WHERE id = $1 AND is_active = true
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    pub async fn insert(&mut self, ticket: &TicketCreate) -> Result<Ticket, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (event_name, user_id, amount, ticket_date, is_active)
            VALUES ($1, $2, $3, $4, true)
            RETURNING id, event_name, user_id, amount, ticket_date
            "#,
        )
        .bind(&ticket.event_name)
        .bind(ticket.user_id)
        .bind(ticket.amount)
        .bind(&ticket.ticket_date)
        .fetch_one(&mut *self.conn)
        .await
    }

    /// Replaces every mutable field. `None` when no active row has this id.
    pub async fn update(
        &mut self,
        id: i32,
        ticket: &TicketCreate,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET event_name = $1, user_id = $2, amount = $3, ticket_date = $4
            WHERE id = $5 AND is_active = true
            RETURNING id, event_name, user_id, amount, ticket_date
            "#,
        )
        .bind(&ticket.event_name)
        .bind(ticket.user_id)
        .bind(ticket.amount)
        .bind(&ticket.ticket_date)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    /// Soft delete. Returns `false` when no active row matched.
    pub async fn deactivate(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tickets
            SET is_active = false
            WHERE id = $1 AND is_active = true
            "#,
        )
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
