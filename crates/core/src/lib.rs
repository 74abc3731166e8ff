//! # Slotbook Core
//!
//! Domain logic for the appointment-booking service: the slot calculator, the
//! booking validator, the error taxonomy they share, and the
//! [`store::AppointmentStore`] seam through which both reach persistence.
//!
//! Nothing here knows about HTTP or SQL.

pub mod booking;
pub mod datetime;
pub mod errors;
pub mod hours;
pub mod models;
pub mod slots;
pub mod store;
