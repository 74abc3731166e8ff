use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use slotbook_core::{
    errors::StoreError,
    models::appointment::{Appointment, NewAppointment},
    store::AppointmentStore,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbAppointment, phone_column};

/// Inserts an appointment unless its (date, time) is already taken.
///
/// Returns `None` when the `unique_appointment_slot` constraint suppressed the
/// insert, which is how a lost booking race shows up.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    name: &str,
    phone: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<Option<DbAppointment>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating appointment: id={}, date={}, time={}", id, date, time);

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, name, phone, "date", "time", created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT ON CONSTRAINT unique_appointment_slot DO NOTHING
        RETURNING id, name, phone, "date", "time", created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(phone)
    .bind(date)
    .bind(time)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if appointment.is_none() {
        tracing::debug!("Slot already taken: date={}, time={}", date, time);
    }

    Ok(appointment)
}

pub async fn appointment_exists(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM appointments
            WHERE "date" = $1 AND "time" = $2
        )
        "#,
    )
    .bind(date)
    .bind(time)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// [`AppointmentStore`] backed by the Postgres `appointments` table.
#[derive(Debug, Clone)]
pub struct PgAppointmentStore {
    pool: Pool<Postgres>,
}

impl PgAppointmentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn exists(&self, date: NaiveDate, time: NaiveTime) -> Result<bool> {
        appointment_exists(&self.pool, date, time).await
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, StoreError> {
        let row = create_appointment(
            &self.pool,
            &appointment.name,
            phone_column(appointment.phone)?,
            appointment.date,
            appointment.time,
        )
        .await?
        .ok_or(StoreError::SlotTaken {
            date: appointment.date,
            time: appointment.time,
        })?;

        Ok(Appointment::try_from(row)?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
