use uuid::Uuid;

use super::error::{UserStoreError, ValidationError};
use super::record::{FieldValue, NewUser, UserField, UserId, UserRecord};

/// Attempts made to find an id that no current record uses.
const MAX_ID_ATTEMPTS: usize = 8;

/// Source of fresh user ids.
pub trait IdGenerator {
    fn generate(&mut self) -> UserId;
}

/// Random v4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> UserId {
        UserId::new(Uuid::new_v4().to_string())
    }
}

/// Ordered in-memory collection of users.
///
/// Insertion order is preserved. Ids are assigned here and nowhere else.
#[derive(Debug, Default)]
pub struct UserStore<G: IdGenerator = UuidGenerator> {
    records: Vec<UserRecord>,
    ids: G,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: IdGenerator> UserStore<G> {
    #[cfg(test)]
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Validate `candidate`, give it a fresh id and append it.
    pub fn add(&mut self, candidate: NewUser) -> Result<&UserRecord, UserStoreError> {
        validate(&candidate)?;
        let id = self.fresh_id()?;
        self.records.push(UserRecord {
            id,
            name: candidate.name,
            age: candidate.age,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    /// Overwrite one field of the record with `id`.
    ///
    /// Only the kind of `value` is checked; the rules applied by `add` are
    /// not re-run, so an age of 0 is accepted here.
    pub fn update(
        &mut self,
        id: &str,
        field: UserField,
        value: FieldValue,
    ) -> Result<&UserRecord, UserStoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or_else(|| UserStoreError::IdNotFound(id.to_string()))?;

        record
            .set_field(field, value)
            .map_err(|found| UserStoreError::TypeMismatch {
                field,
                expected: field.kind(),
                found,
            })?;
        Ok(record)
    }

    /// Remove the first record named exactly `name`.
    pub fn remove(&mut self, name: &str) -> Result<UserRecord, UserStoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| UserStoreError::NameNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    fn fresh_id(&mut self) -> Result<UserId, UserStoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !self.records.iter().any(|r| r.id == id) {
                return Ok(id);
            }
        }
        Err(UserStoreError::IdGeneration(MAX_ID_ATTEMPTS))
    }
}

fn validate(candidate: &NewUser) -> Result<(), ValidationError> {
    if candidate.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if candidate.age <= 0 {
        return Err(ValidationError::NonPositiveAge(candidate.age));
    }
    Ok(())
}
