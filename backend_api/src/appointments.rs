// backend_api/src/appointments.rs
use async_trait::async_trait;

use models::errors::HubResult;
use models::medical::{AppointmentChange, AppointmentRow, NewAppointment};

/// The durable `appointments` collection. This is a separate data source
/// from the in-memory appointment collection in `app_state`; the two are
/// deliberately never reconciled.
///
/// No retry and no client-side timeout: a failed call surfaces once and
/// timeout policy belongs to the HTTP layer.
#[async_trait]
pub trait AppointmentApi: Send + Sync {
    /// All rows, ordered by appointment date then time, newest first.
    async fn list(&self) -> HubResult<Vec<AppointmentRow>>;

    async fn insert(&self, appointment: &NewAppointment) -> HubResult<AppointmentRow>;

    async fn update(&self, id: i64, change: &AppointmentChange) -> HubResult<()>;

    async fn delete(&self, id: i64) -> HubResult<()>;
}
