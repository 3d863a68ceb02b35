use reel_portfolio_lib::config::AppConfig;
use reel_portfolio_lib::{CategoryRegistry, PortfolioError};
use std::io::Write;

const CONTENT: &str = r#"[
  {
    "id": "weddings",
    "name": "Weddings",
    "description": "Highlight reels",
    "externalLink": "https://www.instagram.com/someone",
    "accentColor": "rose",
    "videos": [
      { "title": "First dance", "thumbnail": "/w1.png", "link": "https://youtu.be/W1?si=a" },
      { "title": "Vows", "thumbnail": "/w2.png", "link": "https://www.instagram.com/reel/W2/", "description": "Ceremony cut" }
    ]
  },
  {
    "id": "empty",
    "name": "Coming soon",
    "description": "",
    "externalLink": "https://www.instagram.com/someone"
  }
]"#;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_content_file() {
    let file = write_temp(CONTENT);
    let registry = CategoryRegistry::load_file(file.path()).unwrap();

    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["weddings", "empty"]);
    let weddings = registry.lookup("weddings").unwrap();
    assert_eq!(weddings.videos[0].title, "First dance");
    assert_eq!(weddings.videos[1].description.as_deref(), Some("Ceremony cut"));
    assert_eq!(registry.lookup("empty").unwrap().video_count(), 0);
    assert!(registry.lookup("fashion").is_none());
}

#[test]
fn test_config_content_path_selects_registry() {
    let file = write_temp(CONTENT);
    let config = AppConfig {
        content_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let registry = config.registry().unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_duplicate_ids_in_file_rejected() {
    let json = r#"[
      { "id": "a", "name": "A", "description": "", "externalLink": "" },
      { "id": "a", "name": "A again", "description": "", "externalLink": "" }
    ]"#;
    let err = CategoryRegistry::from_json_str(json).unwrap_err();
    assert!(matches!(err, PortfolioError::DuplicateCategory(id) if id == "a"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CategoryRegistry::load_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let file = write_temp("{ not json");
    let err = CategoryRegistry::load_file(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::Json(_)));
}

#[test]
fn test_one_off_content_file_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let saved_content = dir.path().join("saved.json");
    let config_path = dir.path().join("config.json");
    std::fs::write(&saved_content, "[]").unwrap();
    let one_off = write_temp(CONTENT);

    let config = AppConfig {
        content_path: Some(saved_content.clone()),
        ..Default::default()
    };
    config.save_to(&config_path).unwrap();

    let loaded = AppConfig::load_from(&config_path).unwrap();
    let registry = loaded.registry_with(Some(one_off.path())).unwrap();
    assert_eq!(registry.len(), 2);
    loaded.save_to(&config_path).unwrap();

    // The saved setting survives, and the one-off file can go away
    drop(one_off);
    let reloaded = AppConfig::load_from(&config_path).unwrap();
    assert_eq!(reloaded.content_path.as_deref(), Some(saved_content.as_path()));
    assert!(reloaded.registry().unwrap().is_empty());
}

#[test]
fn test_override_falls_back_to_saved_path() {
    let file = write_temp(CONTENT);
    let config = AppConfig {
        content_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert_eq!(config.registry_with(None).unwrap().len(), 2);
}
