//! The product identifier.
//!
//! A newtype around a UUID so that product ids cannot be confused with other
//! strings or UUIDs. It serializes as a bare UUID and is stored in SQLite as
//! its hyphenated text form, which keeps the table readable from the sqlite3
//! shell.

use std::{fmt, str::FromStr};

/// Unique identifier for a product, generated by the database layer
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub uuid::Uuid);

impl ProductId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl From<uuid::Uuid> for ProductId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<ProductId> for uuid::Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl sqlx::Type<sqlx::Sqlite> for ProductId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ProductId {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        sqlx::Encode::<'q, sqlx::Sqlite>::encode_by_ref(&self.0.hyphenated().to_string(), args)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ProductId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let string = <&str as sqlx::Decode<'r, sqlx::Sqlite>>::decode(value)?;
        Ok(string.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::ProductId;

    #[test]
    fn display_and_parse_agree() {
        let id = ProductId::generate();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn garbage_is_not_an_id() {
        assert!("not-a-uuid".parse::<ProductId>().is_err());
    }
}
