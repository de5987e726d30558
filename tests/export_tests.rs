mod common;
use common::{bk, init_db_with_session, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_session(&db_path);

    let out = temp_out("export_csv", "csv");

    bk().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "timestamp,drink,units,notes,has_photo");
    // newest first
    assert!(lines[1].contains("Dubbel,2.0,,false"));
    assert!(lines[2].contains("IPA,1.5,first one,false"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_session(&db_path);

    let out = temp_out("export_json", "json");

    bk().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: Vec<bakdag::models::CheckIn> =
        serde_json::from_str(&content).expect("valid check-in json");
    assert_eq!(parsed.len(), 2);
    assert!(content.contains("\"drinkName\": \"IPA\""));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_session(&db_path);

    let out = temp_out("export_overwrite", "json");
    fs::write(&out, "keep me").expect("seed file");

    bk().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    bk().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}
