//! Builders wiring repository adapters into the controller.

use std::sync::Arc;

use actix_web::web;

use dad_rental::domain::{Controller, ControllerPorts};
use dad_rental::outbound::memory::InMemoryRentalStore;
use dad_rental::outbound::password::Argon2PasswordHasher;
use dad_rental::outbound::persistence::{
    DbPool, DieselAppointmentRepository, DieselClientRepository, DieselDadRepository,
};

use super::ServerConfig;

/// Ports backed by PostgreSQL.
fn diesel_ports(pool: &DbPool, hasher: Arc<Argon2PasswordHasher>) -> ControllerPorts {
    ControllerPorts {
        clients: Arc::new(DieselClientRepository::new(pool.clone())),
        dads: Arc::new(DieselDadRepository::new(pool.clone())),
        appointments: Arc::new(DieselAppointmentRepository::new(pool.clone())),
        hasher,
    }
}

/// Ports sharing one in-memory store seeded with the sample dads.
fn memory_ports(
    store: &Arc<InMemoryRentalStore>,
    hasher: Arc<Argon2PasswordHasher>,
) -> ControllerPorts {
    ControllerPorts {
        clients: store.clone(),
        dads: store.clone(),
        appointments: store.clone(),
        hasher,
    }
}

/// Build the shared controller, preferring the database when a pool exists.
pub(crate) fn build_controller(config: &ServerConfig) -> web::Data<Controller> {
    let hasher = Arc::new(Argon2PasswordHasher::new(config.password_memory_kib));
    let ports = match &config.db_pool {
        Some(pool) => diesel_ports(pool, hasher),
        None => memory_ports(&Arc::new(InMemoryRentalStore::with_sample_dads()), hasher),
    };
    web::Data::new(Controller::new(ports))
}
