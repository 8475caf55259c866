use sqlx::PgConnection;

use crate::models::{Payment, PaymentCreate};

/// Payment statements, with the same soft-delete rules as tickets.
pub struct PaymentRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PaymentRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn list_active(&mut self) -> Result<Vec<Payment>, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, user_id, amount, currency, payment_date
            FROM payments
            WHERE is_active = true
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await
    }

    pub async fn find_active(&mut self, id: i32) -> Result<Option<Payment>, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, user_id, amount, currency, payment_date
            FROM payments
            WHERE id = $1 AND is_active = true
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    pub async fn insert(&mut self, payment: &PaymentCreate) -> Result<Payment, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (user_id, amount, currency, payment_date, is_active)
            VALUES ($1, $2, $3, $4, true)
            RETURNING id, user_id, amount, currency, payment_date
            "#,
        )
        .bind(payment.user_id)
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(payment.payment_date)
        .fetch_one(&mut *self.conn)
        .await
    }

    pub async fn update(
        &mut self,
        id: i32,
        payment: &PaymentCreate,
    ) -> Result<Option<Payment>, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET user_id = $1, amount = $2, currency = $3, payment_date = $4
            WHERE id = $5 AND is_active = true
            RETURNING id, user_id, amount, currency, payment_date
            "#,
        )
        .bind(payment.user_id)
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(payment.payment_date)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    pub async fn deactivate(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE payments
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
