//! Tri-state field updates

use serde::{Deserialize, Deserializer};

/// How a single field should change during an update
///
/// Deserializes from an optional JSON field when combined with
/// `#[serde(default)]`: an absent key yields `Unchanged`, `null` yields
/// `Clear` and any other value yields `Set`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Field was not supplied
    #[default]
    Unchanged,
    /// Field was explicitly set to null
    Clear,
    /// Field was supplied with a value
    Set(T),
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        email: FieldUpdate<String>,
    }

    #[test]
    fn test_absent_field_is_unchanged() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.email, FieldUpdate::Unchanged);
    }

    #[test]
    fn test_null_field_is_clear() {
        let patch: Patch = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(patch.email, FieldUpdate::Clear);
    }

    #[test]
    fn test_value_field_is_set() {
        let patch: Patch = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(patch.email, FieldUpdate::Set("a@b.c".to_string()));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldUpdate::from(Some(1)), FieldUpdate::Set(1));
        assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Clear);
    }
}
