use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier assigned by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub age: i64,
}

/// Candidate passed to `UserStore::add`; the id is never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Fields that can be changed with `UserStore::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Age,
}

impl UserField {
    pub const ALL: [UserField; 2] = [UserField::Name, UserField::Age];

    pub fn as_str(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Age => "age",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            UserField::Name => ValueKind::Text,
            UserField::Age => ValueKind::Number,
        }
    }

    /// Turn raw prompt input into a value for this field.
    ///
    /// Age input is parsed as an integer; input that does not parse stays
    /// text so the store can reject it as a type mismatch.
    pub fn coerce(self, raw: &str) -> FieldValue {
        match self {
            UserField::Name => FieldValue::Text(raw.to_string()),
            UserField::Age => match raw.trim().parse::<i64>() {
                Ok(n) => FieldValue::Number(n),
                Err(_) => FieldValue::Text(raw.to_string()),
            },
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field '{0}', expected one of: name, age")]
pub struct UnknownField(pub String);

impl FromStr for UserField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(UserField::Name),
            "age" => Ok(UserField::Age),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text"),
            ValueKind::Number => f.write_str("a number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Number(_) => ValueKind::Number,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "'{}'", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl UserRecord {
    #[cfg(test)]
    pub fn field(&self, field: UserField) -> FieldValue {
        match field {
            UserField::Name => FieldValue::Text(self.name.clone()),
            UserField::Age => FieldValue::Number(self.age),
        }
    }

    /// Overwrite `field` when `value` has the field's kind.
    ///
    /// On a kind mismatch the record is left untouched and the offending
    /// kind is returned.
    pub fn set_field(&mut self, field: UserField, value: FieldValue) -> Result<(), ValueKind> {
        match (field, value) {
            (UserField::Name, FieldValue::Text(name)) => self.name = name,
            (UserField::Age, FieldValue::Number(age)) => self.age = age,
            (_, other) => return Err(other.kind()),
        }
        Ok(())
    }
}
