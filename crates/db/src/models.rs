use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use slotbook_core::models::appointment::Appointment;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `appointments` table. Postgres has no unsigned integers, so the
/// phone number is kept as a non-negative `BIGINT`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub name: String,
    pub phone: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        let phone = u64::try_from(row.phone)
            .wrap_err_with(|| format!("appointment {} has a negative phone number", row.id))?;

        Ok(Appointment {
            id: row.id,
            name: row.name,
            phone,
            date: row.date,
            time: row.time,
            created_at: row.created_at,
        })
    }
}

/// Converts a validated phone number into its column representation.
pub fn phone_column(phone: u64) -> Result<i64> {
    i64::try_from(phone).wrap_err("phone number does not fit the phone column")
}
