mod common;

use axum_test::TestServer;
use common::TempDir;
use serde_json::Value;

fn make_server(root: &TempDir) -> TestServer {
    let state = common::create_test_state(root.path());
    TestServer::new(common::test_router(state)).unwrap()
}

fn seeded_root() -> TempDir {
    let root = TempDir::new();
    root.mkdir("sub");
    root.mkdir("子");
    root.write("file.txt", "hello");
    root.write("spécial@file.txt", "special");
    root.write("sub/inner.txt", "inner contents");
    root
}

#[tokio::test]
async fn test_root_listing() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server.get("/util/files").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let names: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["file.txt", "spécial@file.txt", "sub", "子"]);

    let file = &json["entries"][0];
    assert_eq!(file["type"], "file");
    assert_eq!(file["size"], 5);
    assert_eq!(file["path"], "file.txt");

    let dir = &json["entries"][2];
    assert_eq!(dir["type"], "dir");
    assert!(dir["size"].is_null());
}

#[tokio::test]
async fn test_empty_path_targets_root() {
    let root = seeded_root();
    let server = make_server(&root);

    let explicit = server
        .get("/util/files")
        .add_query_param("path", "")
        .await
        .json::<Value>();
    let implicit = server.get("/util/files").await.json::<Value>();

    assert_eq!(explicit, implicit);
    assert_eq!(explicit["root"], explicit["target"]);
}

#[tokio::test]
async fn test_subdirectory_listing_uses_relative_paths() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server.get("/util/files").add_query_param("path", "sub").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["entries"][0]["name"], "inner.txt");
    assert_eq!(json["entries"][0]["path"], "sub/inner.txt");
}

#[tokio::test]
async fn test_file_content() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "sub/../file.txt")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["content"], "hello");
    assert_eq!(json["size"], 5);
    assert!(json.get("entries").is_none());
}

#[tokio::test]
async fn test_file_with_unicode_name_and_bom() {
    let root = TempDir::new();
    root.write("子/données.txt", "\u{feff}Ünïcødé 🔥");
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "子/données.txt")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["content"], "Ünïcødé 🔥");
}

#[tokio::test]
async fn test_large_file_is_truncated() {
    let root = TempDir::new();
    root.write("big.txt", "a".repeat(16_050));
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "big.txt")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let content = json["content"].as_str().unwrap();
    assert_eq!(content.chars().count(), 16_003);
    assert!(content.ends_with("..."));
    assert_eq!(json["size"], 16_050);
}

#[tokio::test]
async fn test_traversal_outside_root_is_rejected() {
    let root = seeded_root();
    let server = make_server(&root);

    for path in ["..", "../outside.txt", "sub/../../x", "/etc/passwd"] {
        let response = server.get("/util/files").add_query_param("path", path).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"],
            "Path is outside of allowed root"
        );
    }
}

#[tokio::test]
async fn test_nul_character_is_invalid_argument() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "file\0.txt")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "invalid_argument");
}

#[tokio::test]
async fn test_missing_path_is_not_found() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "nope/missing.txt")
        .await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Path not found");
    assert!(json["details"]["target"].as_str().unwrap().ends_with("missing.txt"));
}

#[tokio::test]
async fn test_missing_root_is_not_found() {
    let root = TempDir::new();
    let missing = root.path().join("does-not-exist");
    let state = common::create_test_state(&missing);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/util/files").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_overlong_path_is_rejected() {
    let root = seeded_root();
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "a".repeat(5000))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "validation_error");
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlink_escaping_root_is_rejected() {
    let outside = TempDir::new();
    outside.write("secret.txt", "secret");
    let root = TempDir::new();
    std::os::unix::fs::symlink(outside.path(), root.path().join("escape")).unwrap();
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "escape/secret.txt")
        .await;

    response.assert_status_bad_request();
}

#[cfg(unix)]
#[tokio::test]
async fn test_listing_hides_size_of_link_leaving_root() {
    let outside = TempDir::new();
    let secret = outside.write("secret.txt", "twelve bytes");
    let root = TempDir::new();
    root.write("local.txt", "abc");
    std::os::unix::fs::symlink(&secret, root.path().join("leak.txt")).unwrap();
    std::os::unix::fs::symlink(root.path().join("local.txt"), root.path().join("alias.txt"))
        .unwrap();
    let server = make_server(&root);

    let response = server.get("/util/files").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let entries = json["entries"].as_array().unwrap();
    let entry = |name: &str| {
        entries
            .iter()
            .find(|e| e["name"] == name)
            .unwrap_or_else(|| panic!("missing entry {name}"))
            .clone()
    };

    assert_eq!(entry("leak.txt")["type"], "dir");
    assert!(entry("leak.txt")["size"].is_null());
    assert_eq!(entry("alias.txt")["type"], "file");
    assert_eq!(entry("alias.txt")["size"], 3);
}

#[tokio::test]
async fn test_file_beyond_read_limit_reports_full_size() {
    let root = TempDir::new();
    root.write("big.log", "q".repeat(1_000_000));
    let server = make_server(&root);

    let response = server
        .get("/util/files")
        .add_query_param("path", "big.log")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["size"], 1_000_000);
    let content = json["content"].as_str().unwrap();
    assert_eq!(content.chars().count(), 16_003);
    assert!(content.ends_with("..."));
}
