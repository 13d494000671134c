//! Diesel table definitions. Must match `migrations/` exactly.

diesel::table! {
    /// Registered clients. `username` carries a unique index.
    clients (id) {
        id -> Int4,
        username -> Varchar,
        password_hash -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    /// Rentable dads. Seeded by migration.
    dads (id) {
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        description -> Text,
        hourly_rate_cents -> Int8,
        image_path -> Varchar,
    }
}

diesel::table! {
    /// Appointments linking a client to a dad.
    client_has_dad (id) {
        id -> Int4,
        client_id -> Int4,
        dad_id -> Int4,
        start_time -> Timestamp,
        end_time -> Timestamp,
    }
}

diesel::joinable!(client_has_dad -> clients (client_id));
diesel::joinable!(client_has_dad -> dads (dad_id));

diesel::allow_tables_to_appear_in_same_query!(clients, dads, client_has_dad);
