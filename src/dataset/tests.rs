//! Tests for dataset loading and access.

use crate::dataset::{Category, Dataset, Entry};
use crate::error::HotTakeError;
use crate::test_support::{sample_dataset, write_dataset};

const FULL_JSON: &str = r#"{
    "people": ["Alice", {"take": "Bob", "image": "bob.png"}],
    "companies": ["Initech"],
    "languages": [{"take": "Rust", "image": ["rust.png", "ferris.png"]}],
    "technologies": [],
    "problems": ["off-by-one errors"],
    "tlds": [".rs"],
    "takes": ["{person} is right about {language}"]
}"#;

#[test]
fn test_parse_full_json() {
    let dataset = Dataset::from_json(FULL_JSON).unwrap();

    assert_eq!(
        dataset.category(Category::People),
        [
            Entry::plain("Alice"),
            Entry::illustrated("Bob", ["bob.png"]).unwrap()
        ]
    );
    assert_eq!(
        dataset.category(Category::Languages)[0].images(),
        ["rust.png", "ferris.png"]
    );
    assert!(dataset.category(Category::Technologies).is_empty());
    assert_eq!(dataset.category(Category::Takes).len(), 1);
}

#[test]
fn test_parse_yaml() {
    let yaml = r#"
people: [Alice]
companies: []
languages:
  - take: Rust
    image: rust.png
technologies: []
problems: []
tlds: []
takes:
  - "{language} is dying"
"#;
    let dataset = Dataset::from_yaml(yaml).unwrap();
    assert_eq!(dataset.category(Category::Languages)[0].value(), "Rust");
    assert_eq!(dataset.category(Category::Takes)[0].value(), "{language} is dying");
}

#[test]
fn test_missing_category_is_rejected() {
    let json = r#"{
        "people": [], "companies": [], "languages": [],
        "technologies": [], "problems": [], "takes": []
    }"#;
    let err = Dataset::from_json(json).unwrap_err();
    assert!(matches!(err, HotTakeError::Dataset(_)));
    assert!(err.to_string().contains("tlds"), "unexpected error: {err}");
}

#[test]
fn test_unknown_category_is_rejected() {
    let json = r#"{
        "people": [], "companies": [], "languages": [], "technologies": [],
        "problems": [], "tlds": [], "takes": [], "frameworks": []
    }"#;
    let err = Dataset::from_json(json).unwrap_err();
    assert!(err.to_string().contains("frameworks"), "unexpected error: {err}");
}

#[test]
fn test_wrong_entry_shape_is_rejected() {
    let json = r#"{
        "people": [42], "companies": [], "languages": [], "technologies": [],
        "problems": [], "tlds": [], "takes": []
    }"#;
    assert!(matches!(
        Dataset::from_json(json),
        Err(HotTakeError::Dataset(_))
    ));
}

#[test]
fn test_load_json_file() {
    let (_dir, path) = write_dataset(&sample_dataset(), "hotTakeData.json");
    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset, sample_dataset());
}

#[test]
fn test_load_yaml_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("data.yml");
    let yaml = serde_yaml::to_string(&sample_dataset()).unwrap();
    std::fs::write(&path, yaml).unwrap();

    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset, sample_dataset());
}

#[test]
fn test_load_missing_file() {
    let err = Dataset::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, HotTakeError::Dataset(_)));
    assert!(err.to_string().contains("failed to read dataset file"));
}

#[test]
fn test_from_categories_and_summary() {
    let dataset = Dataset::from_categories([(Category::Tlds, vec![Entry::plain(".com")])]);
    let summary = dataset.summary();

    assert_eq!(summary.len(), 7);
    assert_eq!(summary[0], (Category::People, 0));
    assert_eq!(summary[5], (Category::Tlds, 1));
}

#[test]
fn test_category_names() {
    let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        ["people", "companies", "languages", "technologies", "problems", "tlds", "takes"]
    );
    assert_eq!(Category::Tlds.to_string(), "tlds");
}
