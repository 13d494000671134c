//! Mutex-guarded tables backing the in-memory repository adapters.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AppointmentRepository, AppointmentRepositoryError, ClientRepository, ClientRepositoryError,
    DadRepository, DadRepositoryError,
};
use crate::domain::{Appointment, ClientId, Dad, DadId, NewClient};

/// The dads seeded into a fresh store; mirrors the database seed.
#[must_use]
pub fn sample_dads() -> Vec<Dad> {
    [
        (
            1,
            "Hank",
            "Hill",
            "Propane expert. Will inspect your lawn and grill technique.",
            2_500,
            "hank",
        ),
        (
            2,
            "Phil",
            "Dunphy",
            "Cool dad. Knows every card trick and most of the lyrics.",
            3_000,
            "phil",
        ),
        (
            3,
            "Bob",
            "Belcher",
            "Makes a great burger and listens to your problems.",
            2_200,
            "bob",
        ),
        (
            4,
            "Danny",
            "Tanner",
            "Tidy, supportive and always ready with a heart-to-heart.",
            2_800,
            "danny",
        ),
    ]
    .into_iter()
    .map(|(id, first, last, description, cents, image)| Dad {
        id: DadId::new(id),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        description: description.to_owned(),
        hourly_rate_cents: cents,
        image_path: format!("images/dads/{image}.jpg"),
    })
    .collect()
}

#[derive(Debug, Clone)]
struct ClientRecord {
    id: ClientId,
    client: NewClient,
}

#[derive(Debug, Default)]
struct Tables {
    clients: Vec<ClientRecord>,
    dads: Vec<Dad>,
    appointments: Vec<Appointment>,
}

/// Thread-safe in-memory implementation of every repository port.
///
/// # Examples
/// ```
/// use dad_rental::outbound::memory::InMemoryRentalStore;
///
/// let store = InMemoryRentalStore::with_sample_dads();
/// assert_eq!(store.appointment_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRentalStore {
    tables: Mutex<Tables>,
}

impl InMemoryRentalStore {
    /// Store seeded with `dads` and no clients.
    #[must_use]
    pub fn with_dads(dads: Vec<Dad>) -> Self {
        Self {
            tables: Mutex::new(Tables {
                dads,
                ..Tables::default()
            }),
        }
    }

    /// Store seeded with [`sample_dads`].
    #[must_use]
    pub fn with_sample_dads() -> Self {
        Self::with_dads(sample_dads())
    }

    /// Number of stored appointments.
    #[must_use]
    pub fn appointment_count(&self) -> usize {
        self.tables().map_or(0, |tables| tables.appointments.len())
    }

    /// Stored appointments, oldest first.
    #[must_use]
    pub fn appointments(&self) -> Vec<Appointment> {
        self.tables()
            .map(|tables| tables.appointments.clone())
            .unwrap_or_default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }

    fn find_client<T>(
        &self,
        username: &str,
        project: impl FnOnce(&ClientRecord) -> T,
    ) -> Result<Option<T>, ClientRepositoryError> {
        let tables = self.tables().map_err(ClientRepositoryError::connection)?;
        Ok(tables
            .clients
            .iter()
            .find(|record| record.client.username == username)
            .map(project))
    }
}

#[async_trait]
impl ClientRepository for InMemoryRentalStore {
    async fn client_exists(&self, username: &str) -> Result<bool, ClientRepositoryError> {
        Ok(self.find_client(username, |_| ())?.is_some())
    }

    async fn add_client(&self, client: &NewClient) -> Result<(), ClientRepositoryError> {
        let mut tables = self.tables().map_err(ClientRepositoryError::connection)?;
        if tables
            .clients
            .iter()
            .any(|record| record.client.username == client.username)
        {
            return Err(ClientRepositoryError::query("duplicate record"));
        }
        let next_id = tables
            .clients
            .last()
            .map_or(1, |record| record.id.get() + 1);
        tables.clients.push(ClientRecord {
            id: ClientId::new(next_id),
            client: client.clone(),
        });
        Ok(())
    }

    async fn find_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError> {
        self.find_client(username, |record| record.client.password_hash.clone())
    }

    async fn id_via_username(
        &self,
        username: &str,
    ) -> Result<Option<ClientId>, ClientRepositoryError> {
        self.find_client(username, |record| record.id)
    }

    async fn first_name_via_username(
        &self,
        username: &str,
    ) -> Result<Option<String>, ClientRepositoryError> {
        self.find_client(username, |record| record.client.first_name.clone())
    }

    async fn client_dads(&self, client_id: ClientId) -> Result<Vec<Dad>, ClientRepositoryError> {
        let tables = self.tables().map_err(ClientRepositoryError::connection)?;
        let mut booked: Vec<&Appointment> = tables
            .appointments
            .iter()
            .filter(|appointment| appointment.client_id == client_id)
            .collect();
        booked.sort_by_key(|appointment| appointment.start);
        Ok(booked
            .into_iter()
            .filter_map(|appointment| tables.dads.iter().find(|dad| dad.id == appointment.dad_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DadRepository for InMemoryRentalStore {
    async fn all_dads(&self) -> Result<Vec<Dad>, DadRepositoryError> {
        let tables = self.tables().map_err(DadRepositoryError::connection)?;
        let mut dads = tables.dads.clone();
        dads.sort_by_key(|dad| dad.id);
        Ok(dads)
    }

    async fn dad(&self, id: DadId) -> Result<Option<Dad>, DadRepositoryError> {
        let tables = self.tables().map_err(DadRepositoryError::connection)?;
        Ok(tables.dads.iter().find(|dad| dad.id == id).cloned())
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryRentalStore {
    async fn set_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<(), AppointmentRepositoryError> {
        let mut tables = self
            .tables()
            .map_err(AppointmentRepositoryError::connection)?;
        let client_known = tables
            .clients
            .iter()
            .any(|record| record.id == appointment.client_id);
        let dad_known = tables.dads.iter().any(|dad| dad.id == appointment.dad_id);
        if !(client_known && dad_known) {
            return Err(AppointmentRepositoryError::query(
                "referenced record does not exist",
            ));
        }
        tables.appointments.push(appointment.clone());
        Ok(())
    }
}
