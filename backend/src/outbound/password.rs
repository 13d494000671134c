//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings, so the algorithm parameters travel with
//! each record and can be raised without invalidating existing clients.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::PlainPassword;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Memory cost in KiB used in production.
pub const DEFAULT_MEMORY_KIB: u32 = Params::DEFAULT_M_COST;

/// [`PasswordHasher`] producing Argon2id PHC strings.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Hasher using `memory_kib` of memory per hash.
    ///
    /// Values below the Argon2 minimum are raised to it.
    #[must_use]
    pub fn new(memory_kib: u32) -> Self {
        let memory_kib = memory_kib.max(Params::MIN_M_COST);
        let params = Params::new(
            memory_kib,
            Params::DEFAULT_T_COST,
            Params::DEFAULT_P_COST,
            None,
        )
        .unwrap_or_default();
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &PlainPassword) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.expose().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| PasswordHashError::hashing(error.to_string()))
    }

    fn verify(&self, password: &PlainPassword, stored: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|error| PasswordHashError::malformed(error.to_string()))?;
        // Parameters come from the stored hash, not from `self`.
        match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(error) => Err(PasswordHashError::malformed(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        Argon2PasswordHasher::new(Params::MIN_M_COST)
    }

    #[rstest]
    fn hashes_verify_against_the_same_password(hasher: Argon2PasswordHasher) {
        let password = PlainPassword::new("Abcd123!");
        let stored = hasher.hash(&password).expect("hash");

        assert!(stored.starts_with("$argon2id$v=19$"));
        assert!(hasher.verify(&password, &stored).expect("well formed"));
        assert!(
            !hasher
                .verify(&PlainPassword::new("Abcd123?"), &stored)
                .expect("well formed")
        );
    }

    #[rstest]
    fn salts_differ_between_hashes(hasher: Argon2PasswordHasher) {
        let password = PlainPassword::new("Abcd123!");
        assert_ne!(
            hasher.hash(&password).expect("hash"),
            hasher.hash(&password).expect("hash")
        );
    }

    #[rstest]
    fn cost_is_read_from_the_stored_hash(hasher: Argon2PasswordHasher) {
        let password = PlainPassword::new("Abcd123!");
        let stored = Argon2PasswordHasher::new(Params::MIN_M_COST * 2)
            .hash(&password)
            .expect("hash");
        assert!(hasher.verify(&password, &stored).expect("well formed"));
    }

    #[rstest]
    fn tiny_memory_cost_is_raised_to_the_minimum() {
        let stored = Argon2PasswordHasher::new(0)
            .hash(&PlainPassword::new("Abcd123!"))
            .expect("hash");
        assert!(stored.contains(&format!("m={}", Params::MIN_M_COST)));
    }

    #[rstest]
    #[case("")]
    #[case("plaintext")]
    #[case("sha256$1$00$00")]
    #[case("argon2id$v=19$m=8,t=2,p=1")]
    fn malformed_hashes_are_errors(hasher: Argon2PasswordHasher, #[case] stored: &str) {
        let result = hasher.verify(&PlainPassword::new("Abcd123!"), stored);
        assert!(matches!(result, Err(PasswordHashError::Malformed { .. })));
    }
}
