#[cfg(test)]
mod options_tests {
    use std::fs;
    use clap::Parser;
    use crate::*;

    #[test]
    fn test_options_defaults() {
        let options = FirmataBuilderOptions::parse_from(["firmata-builder"]);
        assert_eq!(options.catalog, std::path::PathBuf::from("./features"));
        assert!(!options.list && !options.stdout);
        let selection = options.selection().unwrap();
        assert_eq!(selection, UserSelection::default());
    }

    #[test]
    fn test_selection_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, "filename = \"FromFile\"\nselected_features = [\"ServoFirmata\"]\n").unwrap();
        let options = FirmataBuilderOptions::parse_from([
            "firmata-builder",
            "--selection", path.to_str().unwrap(),
            "-f", "I2CFirmata",
            "-f", "EncoderFirmata",
            "--filename", "Overridden",
            "--baud", "9600",
        ]);
        let selection = options.selection().unwrap();
        assert_eq!(selection, UserSelection::new(
            "Overridden",
            Connection::Serial { baud: 9600 },
            &["ServoFirmata", "I2CFirmata", "EncoderFirmata"],
        ));
    }

    #[test]
    fn test_describe_catalog() {
        let catalog: FeatureCatalog = vec![
            FeatureDescriptor::new("EncoderFirmata", "utility/", "EncoderFirmata", "encoder").with_reporting(),
            FeatureDescriptor::new("ServoFirmata", "utility/", "ServoFirmata", "servo").with_capability(Capability::Servo),
            FeatureDescriptor::new("AnalogInputFirmata", "utility/", "AnalogInputFirmata", "analogInput")
                .with_capability(Capability::AnalogInput)
                .with_reporting(),
        ].into_iter().collect();
        let listing = describe_catalog(&catalog);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "analog input:");
        assert!(lines[1].contains("AnalogInputFirmata") && lines[1].ends_with("[reporting]"));
        assert_eq!(lines[2], "servo:");
        assert_eq!(lines[4], "other:");
        assert!(lines[5].contains("EncoderFirmata"));
    }
}
