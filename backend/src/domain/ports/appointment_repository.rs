//! Port for booking appointments.

use async_trait::async_trait;

use crate::domain::Appointment;

use super::define_port_error;

define_port_error! {
    /// Errors raised by appointment repository adapters.
    pub enum AppointmentRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } => "appointment repository connection failed: {message}",
        /// The insert failed, e.g. because the client or dad does not exist.
        Query { message: String } => "appointment repository query failed: {message}",
    }
}

/// Records client-dad appointments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Store one appointment.
    async fn set_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<(), AppointmentRepositoryError>;
}
