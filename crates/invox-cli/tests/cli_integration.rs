use invox_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn init_writes_config_and_store() {
    let world = TestWorld::new();

    world
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"));

    assert!(world.data_dir().join("config.toml").exists());
    assert!(world.data_dir().join("invoices").is_dir());
}

#[test]
fn login_whoami_logout_cycle() {
    let world = TestWorld::new();

    world
        .command()
        .args(["login", "user-1"])
        .assert()
        .success();

    world
        .command()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("user-1"));

    world.command().arg("logout").assert().success();

    world
        .command()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("not signed in"));
}

#[test]
fn new_then_list_shows_the_invoice() {
    let world = TestWorld::new();
    world.command().args(["login", "user-1"]).assert().success();

    world
        .command()
        .args(["new", "--project", "Website Redesign", "--total", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created invoice"));

    world
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"));
}

#[test]
fn list_respects_owner_isolation() {
    let world = TestWorld::new();
    world.seed_invoice(fixtures::draft("user-1", "Mine")).unwrap();
    world
        .seed_invoice(fixtures::draft("user-2", "Theirs"))
        .unwrap();

    world
        .command()
        .args(["list", "--user", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mine"))
        .stdout(predicate::str::contains("Theirs").not());
}

#[test]
fn list_json_emits_documents() {
    let world = TestWorld::new();
    world.seed_invoice(fixtures::draft("user-1", "Mine")).unwrap();

    world
        .command()
        .args(["--format", "json", "list", "--user", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"createdBy\": \"user-1\""));
}

#[test]
fn list_without_identity_fails_with_guidance() {
    let world = TestWorld::new();

    world
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[test]
fn delete_with_yes_removes_the_document() {
    let world = TestWorld::new();
    let invoice = world
        .seed_invoice(fixtures::draft("user-1", "Doomed"))
        .unwrap();

    world
        .command()
        .args(["delete", &invoice.id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted invoice"));

    assert!(!world.store().unwrap().document_path(&invoice.id).exists());
}

#[test]
fn delete_missing_invoice_fails() {
    let world = TestWorld::new();

    world
        .command()
        .args(["delete", "nope", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to delete invoice"));
}

#[test]
fn link_prints_the_exact_share_url() {
    let world = TestWorld::new();
    world
        .seed_raw_document(
            "abc123",
            &fixtures::raw_document("abc123", "user-1", "2024-01-01T10:30:00Z"),
        )
        .unwrap();

    // Point the origin at a known host first.
    let config = "origin = \"https://x.test\"\n";
    std::fs::write(world.data_dir().join("config.toml"), config).unwrap();

    world
        .command()
        .args(["link", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://x.test/invoice/abc123/text"));
}

#[test]
fn paid_flips_the_status() {
    let world = TestWorld::new();
    let invoice = world
        .seed_invoice(fixtures::draft("user-1", "Payday"))
        .unwrap();

    world
        .command()
        .args(["paid", &invoice.id])
        .assert()
        .success();

    let updated = world.store().unwrap().get(&invoice.id).unwrap().unwrap();
    assert!(updated.payment_status.is_paid());
}

#[test]
fn export_writes_csv_rows() {
    let world = TestWorld::new();
    world.seed_invoice(fixtures::draft("user-1", "Mine")).unwrap();

    let out = world.base_path().join("invoices.csv");
    world
        .command()
        .args(["export", "--user", "user-1", "--output"])
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,createdBy"));
    assert!(content.contains("Mine"));
}

#[test]
fn ordering_is_newest_first() {
    let world = TestWorld::new();
    world
        .seed_raw_document(
            "older",
            &fixtures::raw_document("older", "user-1", "2024-01-01T00:00:00Z"),
        )
        .unwrap();
    world
        .seed_raw_document(
            "newer",
            &fixtures::raw_document("newer", "user-1", "2024-06-01T00:00:00Z"),
        )
        .unwrap();

    let output = world
        .command()
        .args(["list", "--user", "user-1"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer_pos = stdout.find("newer").expect("newer row missing");
    let older_pos = stdout.find("older").expect("older row missing");
    assert!(newer_pos < older_pos);
}
