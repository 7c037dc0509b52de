//! Present/absent field wrapper for partial updates.
//!
//! A PATCH body may omit any field. `Option<T>` would conflate "key missing"
//! with "key sent as null"; [`Field`] only models the first, and a `null`
//! value fails to deserialize for non-nullable `T`.

use serde::{Deserialize, Deserializer};

/// A field of a partial update: either left out of the request or supplied.
///
/// Use with `#[serde(default)]` so a missing key becomes [`Field::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Return the supplied value, or `current` when the field was left out.
    pub fn or_keep(self, current: T) -> T {
        match self {
            Field::Present(value) => value,
            Field::Absent => current,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Present)
    }
}
