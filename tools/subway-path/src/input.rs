use anyhow::{Context, Result};
use std::path::Path;
use subway_transit::{FarePolicy, NetworkSnapshot, StaticLineProvider};

/// Read a JSON network snapshot and validate every line in it
pub fn read_network(path: &Path) -> Result<StaticLineProvider> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: NetworkSnapshot =
        serde_json::from_str(&data).context("Network file is not a valid snapshot")?;

    log::debug!(
        "  Snapshot has {} stations and {} lines",
        snapshot.stations.len(),
        snapshot.lines.len()
    );

    let provider = StaticLineProvider::from_snapshot(snapshot).context("Invalid network data")?;
    Ok(provider)
}

/// Read a fare policy; fields left out keep their standard values
pub fn read_fare_policy(path: &Path) -> Result<FarePolicy> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let policy: FarePolicy =
        serde_json::from_str(&data).context("Fare policy file is not valid")?;
    policy.validate().context("Fare policy cannot be applied")?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subway_transit::LineProvider;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("subway-path-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_network() {
        let path = write_temp(
            "network.json",
            r#"{
                "stations": [{ "id": "1", "name": "A" }, { "id": "2", "name": "B" }],
                "lines": [{ "id": "l1", "name": "L1", "sections": [{ "up": "1", "down": "2", "distance": 5 }] }]
            }"#,
        );

        let provider = read_network(&path).unwrap();
        assert_eq!(provider.all_lines().len(), 1);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_partial_fare_policy() {
        let path = write_temp("policy.json", r#"{ "base_fare": 1400 }"#);

        let policy = read_fare_policy(&path).unwrap();
        assert_eq!(policy.base_fare, 1400);
        assert_eq!(policy.surcharge, FarePolicy::default().surcharge);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_unusable_fare_policy() {
        let path = write_temp("zero-unit.json", r#"{ "middle_unit": 0 }"#);
        assert!(read_fare_policy(&path).is_err());
        std::fs::remove_file(path).ok();

        let path = write_temp("inverted.json", r#"{ "base_distance": 60 }"#);
        let err = read_fare_policy(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("60 km"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_demo_network() {
        use subway_transit::{PathService, StationIdentifier};

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/network.json");
        let service = PathService::new(read_network(&path).unwrap());

        let result = service
            .find_shortest_path(&StationIdentifier::new("1"), &StationIdentifier::new("3"))
            .unwrap();
        assert_eq!(result.distance, 20);
        assert_eq!(result.fare, 1450);
    }

    #[test]
    fn test_missing_file() {
        assert!(read_network(Path::new("/nonexistent/network.json")).is_err());
    }
}
