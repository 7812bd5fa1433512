use crate::traits::Serializer;
use taskboard_core::{BoardError, BoardResult};

/// Pretty-printed JSON serializer
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> BoardResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> BoardResult<T> {
        serde_json::from_slice(bytes).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::{Theme, UserSettings};

    #[test]
    fn test_settings_keep_their_json_keys() {
        let settings = UserSettings {
            theme: Theme::Dark,
            ..UserSettings::default()
        };

        let bytes = JsonSerializer.serialize(&settings).unwrap();
        let json_str = String::from_utf8(bytes).unwrap();

        assert!(json_str.contains("\"theme\": \"dark\""));
        assert!(json_str.contains("showCompletedTasks"));
        assert!(json_str.contains('\n'));
    }

    #[test]
    fn test_malformed_input_is_a_serialization_error() {
        let result: BoardResult<UserSettings> = JsonSerializer.deserialize(b"{ not json");
        assert!(matches!(result, Err(BoardError::Serialization(_))));
    }

    #[test]
    fn test_wrong_enum_value_is_rejected() {
        let result: BoardResult<UserSettings> =
            JsonSerializer.deserialize(br#"{"theme":"solarized"}"#);
        assert!(result.is_err());
    }
}
