use std::collections::HashSet;

use super::*;
use crate::catalog::model::builtin_catalog;

struct SetProbe {
    present: HashSet<String>,
}

impl ModelProbe for SetProbe {
    fn exists(&self, path: &str) -> bool {
        self.present.contains(path)
    }
}

#[test]
fn missing_assets_downgrade_only_their_entry() {
    let catalog = builtin_catalog();
    let probe = SetProbe {
        present: HashSet::from([
            "/models/2016_ferrari_488_gtb.glb".to_string(),
            "/models/mclaren_720s.glb".to_string(),
        ]),
    };

    let statuses = probe_catalog(&catalog, &probe);
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[0].1, Availability::Available);
    assert_eq!(statuses[1].1, Availability::Error);
    assert_eq!(statuses[2].1, Availability::Available);
}

#[test]
fn all_missing_still_reports_every_entry() {
    let catalog = builtin_catalog();
    let probe = SetProbe {
        present: HashSet::new(),
    };
    let statuses = probe_catalog(&catalog, &probe);
    assert!(statuses.iter().all(|(_, s)| *s == Availability::Error));
    assert_eq!(statuses.len(), catalog.len());
}

#[test]
fn fs_probe_strips_site_absolute_prefix() {
    let dir = std::env::temp_dir().join("showroom_probe_test");
    let models = dir.join("models");
    std::fs::create_dir_all(&models).unwrap();
    std::fs::write(models.join("test_car.glb"), b"glTF").unwrap();

    let probe = FsModelProbe::new(&dir);
    assert!(probe.exists("/models/test_car.glb"));
    assert!(probe.exists("models/test_car.glb"));
    assert!(!probe.exists("/models/other_car.glb"));

    std::fs::remove_dir_all(&dir).ok();
}
