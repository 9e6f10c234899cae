use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_valuate_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.arg("valuate").arg("tests/fixtures/portfolio.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("address,status,valuation\n"))
        .stdout(predicate::str::contains("\"Carrer dels Tallers, 11\",available,500000"))
        .stdout(predicate::str::contains("Carrer de Sants 9,available,195000"))
        .stdout(predicate::str::contains("Gran Via 1,sold,\n"))
        .stdout(predicate::str::contains("Balmes 5,catalog,\n"))
        .stdout(predicate::str::contains("Pelai 2,investment,\n"))
        .stdout(predicate::str::ends_with("TOTAL,,695000\n"));

    Ok(())
}

#[test]
fn test_valuate_skips_bad_rows() {
    let file = NamedTempFile::new().unwrap();
    common::write_portfolio(
        file.path(),
        &[
            ["available", "Raval 3", "40", ""],
            ["mansion", "Somewhere 1", "500", ""],
            ["sold", "Gran Via 1", "", ""],
            ["available", "Nowhere 7", "not_a_number", ""],
            ["available", "Eixample 20", "10", ""],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.env("SOLID_LOG", "warn").arg("valuate").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading property"))
        .stderr(predicate::str::contains("skipping property row"))
        .stdout(predicate::str::contains("Raval 3,available,164000"))
        .stdout(predicate::str::contains("Eixample 20,available,56000"))
        .stdout(predicate::str::contains("Gran Via 1").not())
        .stdout(predicate::str::contains("TOTAL,,220000"));
}

#[test]
fn test_valuate_skips_oversized_areas() {
    let file = NamedTempFile::new().unwrap();
    common::write_portfolio(
        file.path(),
        &[
            ["available", "Raval 3", "79228162514264337593543950.0", ""],
            ["available", "Raval 5", "10000000000000000000000000.0", ""],
            ["available", "Raval 7", "10000000000000000000000000.0", ""],
            ["available", "Eixample 20", "10", ""],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.arg("valuate").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Property 'Raval 3' area exceeds 1000000"))
        .stderr(predicate::str::contains("Property 'Raval 7' area exceeds 1000000"))
        .stdout(predicate::str::contains("Raval").not())
        .stdout(predicate::str::contains("Eixample 20,available,56000"))
        .stdout(predicate::str::ends_with("TOTAL,,56000\n"));
}

#[test]
fn test_create_user_prints_welcome_email_and_response() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "create-user",
        "--name",
        "Ada Lovelace",
        "--email",
        "Ada@Example.com",
        "--password",
        "analytical-engine",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("to: ada@example.com | Welcome to our app"))
        .stdout(predicate::str::contains(
            r#"{"message":"User created successfully","user":{"name":"Ada Lovelace","email":"ada@example.com"}}"#,
        ))
        .stdout(predicate::str::contains("analytical-engine").not());
}

#[test]
fn test_create_user_with_outbox_mailer_prints_only_response() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "create-user",
        "--name",
        "Ada",
        "--email",
        "ada@example.com",
        "--password",
        "analytical-engine",
        "--mailer",
        "outbox",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to our app").not())
        .stdout(predicate::str::contains("User created successfully"));
}

#[test]
fn test_create_user_rejects_invalid_request() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "create-user",
        "--name",
        "Ada",
        "--email",
        "not-an-email",
        "--password",
        "analytical-engine",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address"));
}

#[test]
fn test_pay_with_each_method() {
    let mut card = Command::new(cargo_bin!("solid-capabilities"));
    card.args([
        "pay",
        "--method",
        "credit-card",
        "--amount",
        "19.90",
        "--credential",
        "4111 1111 1111 1111",
    ]);
    card.assert()
        .success()
        .stdout(predicate::str::diff("card-0001,credit-card ****1111,19.9\n"));

    let mut crypto = Command::new(cargo_bin!("solid-capabilities"));
    crypto.args([
        "pay",
        "--method",
        "crypto",
        "--amount",
        "0.25",
        "--credential",
        "0x52908400098527886E0F7030069857D2E4169EE7",
    ]);
    crypto
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "crypto-0001,crypto 0x52908400098527886e0f7030069857d2e4169ee7,0.25\n",
        ));
}

#[test]
fn test_pay_with_unknown_method_lists_known_methods() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "pay",
        "--method",
        "paypal",
        "--amount",
        "10",
        "--credential",
        "someone",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown payment method 'paypal'"))
        .stderr(predicate::str::contains("credit-card, crypto"));
}

#[test]
fn test_pay_rejects_non_positive_amount() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "pay",
        "--method",
        "credit-card",
        "--amount",
        "0",
        "--credential",
        "4111111111111111",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));
}

#[test]
fn test_notify_investor() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.args([
        "notify",
        "--email",
        "grace@fund.io",
        "--name",
        "Grace",
        "--message",
        "Q3 report is out",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("to: grace@fund.io | Q3 report is out\n"));
}

#[test]
fn test_mailer_from_environment() {
    let mut cmd = Command::new(cargo_bin!("solid-capabilities"));
    cmd.env("SOLID_MAILER", "outbox").args([
        "notify",
        "--email",
        "grace@fund.io",
        "--name",
        "Grace",
        "--message",
        "Q3 report is out",
    ]);

    cmd.assert().success().stdout(predicate::str::is_empty());
}
