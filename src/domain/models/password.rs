use std::fmt;

use sea_orm::{
    ColIdx, DbErr, QueryResult, TryGetError, TryGetable, Value,
    sea_query::{ArrayType, ColumnType, Nullable, StringLen, ValueType, ValueTypeErr},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::active_comparer;
use crate::domain::error::PasswordError;

/// Placeholder emitted wherever a password would otherwise appear in
/// rendered or serialized output.
pub const REDACTED: &str = "FILTERED";

/// Value object holding a password in either of its lifecycle forms: the
/// plaintext a user just supplied, or the encoded hash read back from
/// storage. The type does not track which form it carries; callers encode
/// a plaintext exactly once with [`value`] before persisting it, and call
/// [`compare`] only on content that came out of storage.
///
/// Every generic rendering path (`Display`, `Debug`, `Serialize`) emits
/// the [`REDACTED`] sentinel instead of the content. The content itself
/// is reachable only through [`as_str`], [`value`] and [`compare`].
///
/// [`value`]: Password::value
/// [`compare`]: Password::compare
/// [`as_str`]: Password::as_str
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Get the raw content as a string slice, bypassing redaction.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode the content for persistence: hashes it with the active
    /// comparer and returns the encoded hash as a database scalar. The
    /// value itself is left untouched, so calling this twice hashes the
    /// same plaintext twice.
    pub fn value(&self) -> Result<Value, PasswordError> {
        let hash = active_comparer().hash(&self.0)?;
        Ok(hash.into())
    }

    /// Populate the value from a database scalar, replacing any previous
    /// content. `NULL` resets the value to empty; anything other than a
    /// string or byte column is rejected.
    pub fn scan(&mut self, src: Value) -> Result<(), PasswordError> {
        match src {
            Value::String(Some(text)) => self.0 = *text,
            Value::Bytes(Some(bytes)) => {
                self.0 = String::from_utf8(*bytes)
                    .map_err(|err| PasswordError::MalformedHash(err.to_string()))?;
            }
            Value::String(None) | Value::Bytes(None) => self.0.clear(),
            other => return Err(PasswordError::UnsupportedSourceType(value_kind(&other))),
        }
        Ok(())
    }

    /// Verify `plain` against the content, treating the content as an
    /// encoded hash produced by a compatible comparer.
    pub fn compare(&self, plain: &str) -> Result<(), PasswordError> {
        active_comparer().compare(&self.0, plain)
    }
}

impl From<String> for Password {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl From<&str> for Password {
    fn from(content: &str) -> Self {
        Self(content.to_owned())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&REDACTED).finish()
    }
}

impl Serialize for Password {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(REDACTED)
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl TryGetable for Password {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        // Text columns first; BYTEA-style columns land in the bytes arm.
        if let Ok(text) = <Option<String> as TryGetable>::try_get_by(res, index) {
            return Ok(Self(text.unwrap_or_default()));
        }
        match <Option<Vec<u8>> as TryGetable>::try_get_by(res, index)? {
            Some(bytes) => String::from_utf8(bytes).map(Self).map_err(|err| {
                TryGetError::DbErr(DbErr::TryIntoErr {
                    from: "Vec<u8>",
                    into: "Password",
                    source: Box::new(err),
                })
            }),
            None => Ok(Self::default()),
        }
    }
}

impl ValueType for Password {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        match v {
            Value::String(Some(text)) => Ok(Self(*text)),
            Value::Bytes(Some(bytes)) => String::from_utf8(*bytes).map(Self).map_err(|_| ValueTypeErr),
            Value::String(None) | Value::Bytes(None) => Ok(Self::default()),
            _ => Err(ValueTypeErr),
        }
    }

    fn type_name() -> String {
        stringify!(Password).to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::String
    }

    fn column_type() -> ColumnType {
        ColumnType::String(StringLen::None)
    }
}

impl Nullable for Password {
    fn null() -> Value {
        Value::String(None)
    }
}

/// Name the variant for the unsupported-source error without exposing
/// its payload. Covers every variant sea-orm's default features compile
/// in; variants behind non-default features fall through to the
/// wildcard.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "Bool",
        Value::TinyInt(_) => "TinyInt",
        Value::SmallInt(_) => "SmallInt",
        Value::Int(_) => "Int",
        Value::BigInt(_) => "BigInt",
        Value::TinyUnsigned(_) => "TinyUnsigned",
        Value::SmallUnsigned(_) => "SmallUnsigned",
        Value::Unsigned(_) => "Unsigned",
        Value::BigUnsigned(_) => "BigUnsigned",
        Value::Float(_) => "Float",
        Value::Double(_) => "Double",
        Value::Char(_) => "Char",
        Value::String(_) => "String",
        Value::Bytes(_) => "Bytes",
        Value::Json(_) => "Json",
        Value::ChronoDate(_) => "ChronoDate",
        Value::ChronoTime(_) => "ChronoTime",
        Value::ChronoDateTime(_) => "ChronoDateTime",
        Value::ChronoDateTimeUtc(_) => "ChronoDateTimeUtc",
        Value::ChronoDateTimeLocal(_) => "ChronoDateTimeLocal",
        Value::ChronoDateTimeWithTimeZone(_) => "ChronoDateTimeWithTimeZone",
        Value::TimeDate(_) => "TimeDate",
        Value::TimeTime(_) => "TimeTime",
        Value::TimeDateTime(_) => "TimeDateTime",
        Value::TimeDateTimeWithTimeZone(_) => "TimeDateTimeWithTimeZone",
        Value::Uuid(_) => "Uuid",
        Value::Decimal(_) => "Decimal",
        Value::BigDecimal(_) => "BigDecimal",
        #[allow(unreachable_patterns)]
        _ => "unsupported",
    }
}
