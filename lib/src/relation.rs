use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A related collection whose absence, emptiness and contents all carry
/// meaning.
///
/// The API omits a relation that the caller did not ask to include, and
/// sends `null` or `[]` when it was included but had no rows. Editors rely
/// on the difference, so the three states are kept apart.
#[derive(Clone, Debug, PartialEq)]
pub enum Relation<T> {
    NotRequested,
    RequestedEmpty,
    Populated(Vec<T>),
}

impl<T> Relation<T> {
    /// Maps a raw relation as decoded by [`nullable`].
    pub fn from_raw<R, F>(raw: Option<Option<Vec<R>>>, f: F) -> Self
    where
        F: FnMut(R) -> T,
    {
        match raw {
            None => Self::NotRequested,
            Some(None) => Self::RequestedEmpty,
            Some(Some(items)) if items.is_empty() => Self::RequestedEmpty,
            Some(Some(items)) => Self::Populated(items.into_iter().map(f).collect()),
        }
    }

    pub fn is_not_requested(&self) -> bool {
        matches!(self, Self::NotRequested)
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }

    /// The related rows, empty unless populated.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Populated(items) => items,
            Self::NotRequested | Self::RequestedEmpty => &[],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self::NotRequested
    }
}

// `NotRequested` is meant to be skipped with `skip_serializing_if`; when it
// is not, it reads the same as an empty relation.
impl<T: Serialize> Serialize for Relation<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Populated(items) => items.serialize(serializer),
            Self::NotRequested | Self::RequestedEmpty => serializer.serialize_none(),
        }
    }
}

/// Maps an optional list, folding an empty list into absence.
pub fn optional_list<R, T, F>(raw: Option<Vec<R>>, f: F) -> Option<Vec<T>>
where
    F: FnMut(R) -> T,
{
    raw.filter(|items| !items.is_empty())
        .map(|items| items.into_iter().map(f).collect())
}

/// Keeps a present `null` apart from a missing key.
///
/// Use together with `#[serde(default)]`: a missing key never reaches the
/// deserializer and stays `None`, while `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Raw {
        #[serde(default, deserialize_with = "nullable")]
        students: Option<Option<Vec<u64>>>,
    }

    fn relation(value: serde_json::Value) -> Relation<u64> {
        let raw: Raw = serde_json::from_value(value).unwrap();

        Relation::from_raw(raw.students, |id| id * 10)
    }

    #[test]
    fn decodes_all_three_states() {
        assert_eq!(relation(json!({})), Relation::NotRequested);
        assert_eq!(relation(json!({ "students": null })), Relation::RequestedEmpty);
        assert_eq!(relation(json!({ "students": [] })), Relation::RequestedEmpty);
        assert_eq!(
            relation(json!({ "students": [1, 2] })),
            Relation::Populated(vec![10, 20])
        );
    }

    #[test]
    fn serializes_requested_empty_as_null() {
        let empty: Relation<u64> = Relation::RequestedEmpty;
        assert!(serde_json::to_value(&empty).unwrap().is_null());

        let populated = Relation::Populated(vec![1u64]);
        assert_eq!(serde_json::to_value(&populated).unwrap(), json!([1]));
    }

    #[test]
    fn optional_list_drops_empty() {
        assert_eq!(optional_list(Some(Vec::<u64>::new()), |id| id), None);
        assert_eq!(optional_list(None::<Vec<u64>>, |id| id), None);
        assert_eq!(optional_list(Some(vec![3u64]), |id| id + 1), Some(vec![4]));
    }
}
