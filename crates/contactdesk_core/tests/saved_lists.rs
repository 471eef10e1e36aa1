use contactdesk_core::{
    JsonSavedListRepository, ListServiceError, SavedListRepository, SavedListService, SavedLists,
};
use std::fs;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn missing_file_loads_as_empty_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSavedListRepository::new(dir.path().join("saved_lists.json"));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn create_then_load_returns_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    let mut service = SavedListService::load(JsonSavedListRepository::new(&path)).unwrap();

    assert!(service
        .create_or_overwrite("Team1", names(&["Alice", "Bob"]))
        .unwrap());

    let loaded = JsonSavedListRepository::new(&path).load().unwrap();
    assert_eq!(loaded.get("Team1"), Some(&names(&["Alice", "Bob"])));

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["Team1"][1], "Bob");
}

#[test]
fn create_overwrites_silently_and_skips_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    let mut service = SavedListService::load(JsonSavedListRepository::new(&path)).unwrap();

    assert!(!service.create_or_overwrite("", names(&["Alice"])).unwrap());
    assert!(!service.create_or_overwrite("   ", names(&["Alice"])).unwrap());
    assert!(!service.create_or_overwrite("Team1", Vec::new()).unwrap());
    assert!(!path.exists());

    service.create_or_overwrite("Team1", names(&["Alice"])).unwrap();
    service.create_or_overwrite("Team1", names(&["Carol"])).unwrap();
    assert_eq!(service.get("Team1"), Some(&names(&["Carol"])[..]));
}

#[test]
fn update_and_delete_require_existing_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    let mut service = SavedListService::load(JsonSavedListRepository::new(&path)).unwrap();
    service.create_or_overwrite("Team1", names(&["Alice", "Bob"])).unwrap();

    let err = service.update("Ghost", names(&["Alice"])).unwrap_err();
    assert!(matches!(err, ListServiceError::ListNotFound(name) if name == "Ghost"));
    let err = service.delete("Ghost").unwrap_err();
    assert!(matches!(err, ListServiceError::ListNotFound(_)));
    assert_eq!(service.names(), vec!["Team1"]);

    service.update("Team1", names(&["Removed Contact"])).unwrap();
    assert_eq!(service.get("Team1"), Some(&names(&["Removed Contact"])[..]));

    service.delete("Team1").unwrap();
    assert!(service.get("Team1").is_none());
    assert!(JsonSavedListRepository::new(&path).load().unwrap().is_empty());
}

#[test]
fn save_of_load_is_a_fixed_point() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    let repo = JsonSavedListRepository::new(&path);
    let mut lists = SavedLists::new();
    lists.insert("zeta".to_string(), names(&["B", "A", "B"]));
    lists.insert("alpha".to_string(), names(&["Ünïcode +tag"]));
    repo.save(&lists).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let loaded = repo.load().unwrap();
    repo.save(&loaded).unwrap();

    assert_eq!(loaded, lists);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
    assert!(first.contains("\n  \"alpha\": [\n    \"Ünïcode +tag\"\n  ]"));
    assert!(first.find("\"zeta\"").unwrap() < first.find("\"alpha\"").unwrap());
}

#[test]
fn lists_keep_creation_order_across_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    fs::write(&path, "{\"Zulu\": [\"A\"], \"Mike\": [\"B\"], \"Alpha\": [\"C\"]}").unwrap();
    let mut service = SavedListService::load(JsonSavedListRepository::new(&path)).unwrap();
    assert_eq!(service.names(), vec!["Zulu", "Mike", "Alpha"]);

    service.create_or_overwrite("Bravo", names(&["D"])).unwrap();
    service.create_or_overwrite("Zulu", names(&["E"])).unwrap();
    service.update("Mike", names(&["F"])).unwrap();
    service.delete("Alpha").unwrap();
    assert_eq!(service.names(), vec!["Zulu", "Mike", "Bravo"]);

    let reloaded = JsonSavedListRepository::new(&path).load().unwrap();
    let order: Vec<&str> = reloaded.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["Zulu", "Mike", "Bravo"]);
    assert_eq!(reloaded["Zulu"], names(&["E"]));
}

#[test]
fn malformed_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_lists.json");
    fs::write(&path, "{\"Team1\": \"not a list\"}").unwrap();
    assert!(SavedListService::load(JsonSavedListRepository::new(&path)).is_err());
}
