use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_purchase_pays_change() {
    let script = common::write_script(&["insert, ONE_POUND", "purchase, A"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path());

    // 60p product, £1 inserted: two twenties back from the float
    cmd.assert().success().stdout(predicate::str::contains(
        "2,purchase,A,ok,£0.00,vended A nice product; change £0.40 (2 x TWENTY_PENCE)",
    ));
}

#[test]
fn test_out_of_stock_keeps_balance() {
    let script = common::write_script(&["insert, ONE_POUND", "insert, ONE_POUND", "purchase, E"])
        .unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path())
        .arg("--products")
        .arg("tests/fixtures/products.csv");

    cmd.assert().success().stdout(predicate::str::contains(
        "3,purchase,E,rejected,£2.00,Sorry this product is out of stock",
    ));
}

#[test]
fn test_stock_runs_out_after_last_unit() {
    let script = common::write_script(&[
        "insert, ONE_POUND",
        "purchase, D",
        "insert, ONE_POUND",
        "purchase, D",
        "insert, ONE_POUND",
        "purchase, D",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path())
        .arg("--products")
        .arg("tests/fixtures/products.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2,purchase,D,ok"))
        .stdout(predicate::str::contains("4,purchase,D,ok"))
        .stdout(predicate::str::contains(
            "6,purchase,D,rejected,£1.00,Sorry this product is out of stock",
        ));
}

#[test]
fn test_change_unavailable_without_float() {
    let script = common::write_script(&["insert, ONE_POUND", "purchase, A"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path())
        .arg("--float")
        .arg("0")
        .arg("--no-absorb");

    cmd.assert().success().stdout(predicate::str::contains(
        "2,purchase,A,rejected,£1.00,\"Sorry, this machine cannot give £0.40 in change.",
    ));
}

#[test]
fn test_unknown_product_is_reported() {
    let script = common::write_script(&["insert, ONE_POUND", "purchase, Z"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unknown product: Z"))
        .stdout(predicate::str::contains("2,purchase,Z,rejected,£1.00,Unknown product: Z"));
}
