use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use slotbook_core::{
    errors::StoreError,
    models::appointment::{Appointment, NewAppointment},
    store::AppointmentStore,
};

// Mock repositories for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn exists(
            &self,
            date: NaiveDate,
            time: NaiveTime,
        ) -> eyre::Result<bool>;

        async fn insert(
            &self,
            appointment: &NewAppointment,
        ) -> Result<Appointment, StoreError>;

        async fn ping(&self) -> eyre::Result<()>;
    }
}
