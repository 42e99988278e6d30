#[cfg(test)]
mod feature_tests {
    use std::fs;
    use std::path::Path;
    use crate::error::BuilderError;
    use crate::feature::*;

    const SERVO_TOML: &str = r#"
name = "ServoFirmata"
include_path = "utility/"
class_name = "ServoFirmata"
instance_name = "servo"
capability = "Servo"

[[system_dependencies]]
class_name = "Servo"
"#;

    const I2C_TOML: &str = r#"
name = "I2CFirmata"
include_path = "utility/"
class_name = "I2CFirmata"
instance_name = "i2c"
reporting = true

[[system_dependencies]]
path = ""
class_name = "Wire"
"#;

    #[test]
    pub fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("servo.toml"), SERVO_TOML).unwrap();
        fs::write(dir.path().join("i2c.toml"), I2C_TOML).unwrap();
        fs::write(dir.path().join("README.md"), "not a feature").unwrap();

        let catalog = FeatureCatalog::load_from_dir(dir.path()).unwrap();
        assert_eq!(catalog.names(), vec!["I2CFirmata", "ServoFirmata"]);

        let servo = catalog.get("ServoFirmata").unwrap();
        assert_eq!(servo.capability(), Some(Capability::Servo));
        assert!(!servo.is_reporting());
        assert!(!servo.is_update());
        assert_eq!(servo.system_dependencies(), &[SystemDependency::new("", "Servo")]);
        assert_eq!(servo.include_line(), "#include <utility/ServoFirmata.h>");
        assert_eq!(servo.instance_declaration(), "ServoFirmata servo;");

        let i2c = catalog.get("I2CFirmata").unwrap();
        assert!(i2c.is_reporting());
        assert_eq!(i2c.capability(), None);
        assert_eq!(i2c.system_dependencies()[0].include_line(), "#include <Wire.h>");
    }

    #[test]
    pub fn test_duplicate_catalog_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.toml"), SERVO_TOML).unwrap();
        fs::write(dir.path().join("b.toml"), SERVO_TOML).unwrap();
        match FeatureCatalog::load_from_dir(dir.path()) {
            Err(BuilderError::DuplicateCatalogEntry { name, path }) => {
                assert_eq!(name, "ServoFirmata");
                assert!(path.ends_with("b.toml"));
            },
            other => panic!("expected a duplicate entry error, got {:?}", other),
        }
    }

    #[test]
    pub fn test_misformatted_feature() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.toml"), "name = \"Broken\"\nreporting = \"yes\"\n").unwrap();
        let result = FeatureCatalog::load_from_dir(dir.path());
        assert!(matches!(result, Err(BuilderError::CatalogParse { .. })));
    }

    #[test]
    pub fn test_missing_catalog_dir() {
        let result = FeatureCatalog::load_from_dir(Path::new("./no-such-feature-dir"));
        assert!(matches!(result, Err(BuilderError::CatalogIo { .. })));
    }

    #[test]
    pub fn test_features_compare_by_name() {
        let a = FeatureDescriptor::new("EncoderFirmata", "utility/", "EncoderFirmata", "encoder");
        let b = FeatureDescriptor::new("EncoderFirmata", "", "Other", "other").with_reporting();
        assert_eq!(a, b);
    }

    #[test]
    pub fn test_capabilities() {
        let mut capabilities = Capabilities::default();
        assert_eq!(capabilities.to_string(), "none");
        assert!(!capabilities.needs_analog_write());
        capabilities.enable(Capability::Servo);
        capabilities.enable(Capability::DigitalInput);
        assert!(capabilities.has(Capability::Servo));
        assert!(!capabilities.has(Capability::AnalogOutput));
        assert!(capabilities.needs_analog_write());
        assert_eq!(capabilities.to_string(), "digital input, servo");
        assert_eq!(enum_iterator::all::<Capability>().count(), 6);
    }
}
