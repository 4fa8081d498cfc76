//! Serde helpers shared by the patch structs.

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` patch fields.
///
/// A missing field stays `None` (leave unchanged, via `#[serde(default)]`);
/// an explicit `null` becomes `Some(None)` (clear the column); a value
/// becomes `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use crate::menu::model::UpdateMenu;

    #[test]
    fn test_patch_distinguishes_null_from_missing() {
        let patch: UpdateMenu = serde_json::from_str(r#"{"parent_id": null}"#).unwrap();
        assert_eq!(patch.parent_id, Some(None));
        assert!(patch.name.is_none());

        let patch: UpdateMenu = serde_json::from_str(r#"{"parent_id": 3}"#).unwrap();
        assert_eq!(patch.parent_id, Some(Some(3)));

        let patch: UpdateMenu = serde_json::from_str(r#"{"name": "About"}"#).unwrap();
        assert_eq!(patch.parent_id, None);
        assert_eq!(patch.name.as_deref(), Some("About"));
    }
}
