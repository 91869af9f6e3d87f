use ng_states_core::loader::{EMBEDDED_DATASET, EMBEDDED_STATE_COUNT};
use ng_states_core::prelude::*;
use std::collections::HashSet;
use std::io::Write;

#[test]
fn embedded_dataset_invariants() {
    let db = StatesDb::embedded().unwrap();
    let states = db.states();
    assert_eq!(states.len(), EMBEDDED_STATE_COUNT);

    let names: HashSet<String> = states.iter().map(|s| normalize(s.name())).collect();
    assert_eq!(names.len(), 37, "state names must be unique");

    let postal: HashSet<&str> = states.iter().map(|s| s.postal_code()).collect();
    assert_eq!(postal.len(), 37, "postal codes must be unique");
    for s in states {
        let code = s.postal_code();
        assert_eq!(code.len(), 6, "{} postal code {code}", s.name());
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let c = s.coordinates();
        assert!((4.0..14.0).contains(&c.latitude), "{} latitude", s.name());
        assert!((2.5..15.0).contains(&c.longitude), "{} longitude", s.name());
    }
}

#[test]
fn embedded_dataset_totals() {
    let stats = StatesDb::embedded().unwrap().stats();
    assert_eq!(stats.states, 37);
    assert_eq!(stats.lgas, 774);
    // Three districts per state, one for the FCT.
    assert_eq!(stats.senatorial_districts, 109);
    assert!(stats.towns >= 37);
}

#[test]
fn creation_dates_parse() {
    let db = StatesDb::embedded().unwrap();
    let kano = db.state("Kano").unwrap().founded_on().unwrap();
    assert_eq!(kano.to_string(), "1967-05-27");

    let latest = db
        .states()
        .iter()
        .filter_map(StateRecord::founded_on)
        .max()
        .unwrap();
    assert_eq!(latest.to_string(), "1996-10-01");
}

#[test]
fn embedded_text_round_trips_through_from_json_str() {
    let db = StatesDb::from_json_str(EMBEDDED_DATASET).unwrap();
    assert_eq!(db.states(), StatesDb::embedded().unwrap().states());
}

#[test]
fn serializes_with_dataset_field_names() {
    let db = StatesDb::embedded().unwrap();
    let value = serde_json::to_value(db.state("Oyo").unwrap()).unwrap();
    assert_eq!(value["state"], "Oyo");
    assert_eq!(value["region"], "South-West");
    assert_eq!(value["postal_code"], "200001");
    assert!(value["lgas"].as_array().unwrap().len() > 30);
    assert!(value.get("website").is_none());
}

const MINI: &str = r#"[
  {
    "state": "Federal Capital Territory",
    "capital": "Abuja",
    "region": "North-Central",
    "postal_code": "900001",
    "coordinates": { "latitude": 9.07, "longitude": 7.39 },
    "population": 3564100,
    "created": "1976-02-03",
    "slogan": "Centre of Unity",
    "lgas": ["Abaji", "Bwari"],
    "senatorial_districts": ["FCT"],
    "towns": ["Abuja", "Kubwa"]
  }
]"#;

#[cfg(feature = "json")]
#[test]
fn load_from_path_reads_an_alternative_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINI.as_bytes()).unwrap();

    let db = StatesDb::load_from_path(file.path()).unwrap();
    assert_eq!(db.state_names(), vec!["Federal Capital Territory"]);
    assert_eq!(db.capital("abuja").unwrap(), "Abuja");
    assert_eq!(db.lgas("FCT").unwrap().len(), 2);
}

#[cfg(feature = "json")]
#[test]
fn load_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StatesDb::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, StatesError::Io(_)));
    assert!(err.to_string().contains("Dataset not found"));
}

#[cfg(feature = "json")]
#[test]
fn invalid_dataset_file_is_rejected() {
    let broken = MINI.replace("\"North-Central\"", "\"Middle Belt\"");
    let err = StatesDb::from_reader(broken.as_bytes()).unwrap_err();
    assert!(matches!(err, StatesError::InvalidDataset(_)));
}

#[test]
fn store_is_shareable_across_threads() {
    let db = StatesDb::embedded().unwrap();
    let handles: Vec<_> = ["Lagos", "Kano", "Rivers", "FCT"]
        .into_iter()
        .map(|name| std::thread::spawn(move || db.capital(name).map(str::to_owned)))
        .collect();
    let capitals: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(capitals, vec!["Ikeja", "Kano", "Port Harcourt", "Abuja"]);
}
