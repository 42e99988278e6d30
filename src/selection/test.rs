#[cfg(test)]
mod selection_tests {
    use std::fs;
    use crate::error::BuilderError;
    use crate::selection::*;

    #[test]
    pub fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, r#"
filename = "MyFirmata"
selected_features = ["DigitalInputFirmata", "ServoFirmata"]

[connection.serial]
baud = 115200
"#).unwrap();
        let selection = UserSelection::load_from_toml(&path).unwrap();
        assert_eq!(selection, UserSelection::new(
            "MyFirmata",
            Connection::Serial { baud: 115200 },
            &["DigitalInputFirmata", "ServoFirmata"],
        ));
    }

    #[test]
    pub fn test_defaults_fill_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, "selected_features = [\"I2CFirmata\"]\n").unwrap();
        let selection = UserSelection::load_from_toml(&path).unwrap();
        assert_eq!(selection.filename, DEFAULT_FILENAME);
        assert_eq!(selection.connection, Connection::Serial { baud: DEFAULT_BAUD });
        assert_eq!(selection.selected_features, vec!["I2CFirmata".to_string()]);
    }

    #[test]
    pub fn test_misformatted_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, "[connection.ethernet]\nport = 3030\n").unwrap();
        let result = UserSelection::load_from_toml(&path);
        assert!(matches!(result, Err(BuilderError::SelectionParse { .. })));
    }

    #[test]
    pub fn test_set_baud() {
        let mut selection = UserSelection::default();
        selection.set_baud(9600);
        assert_eq!(selection.connection, Connection::Serial { baud: 9600 });
    }
}
