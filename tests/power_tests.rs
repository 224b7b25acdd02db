use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_start_off_rejects_customer_actions() {
    let script = common::write_script(&[
        "insert, ONE_POUND",
        "purchase, A",
        "refund,",
        "power_on,",
        "insert, ONE_POUND",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path()).arg("--start-off");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,insert,ONE_POUND,rejected,£0.00,The machine is switched off.",
        ))
        .stdout(predicate::str::contains(
            "2,purchase,A,rejected,£0.00,The machine is switched off.",
        ))
        .stdout(predicate::str::contains(
            "3,refund,,rejected,£0.00,The machine is switched off.",
        ))
        .stdout(predicate::str::contains("4,power_on,,ok,£0.00,powered on"))
        .stdout(predicate::str::contains("5,insert,ONE_POUND,ok,£1.00,balance £1.00"));
}

#[test]
fn test_power_off_mid_transaction_keeps_balance() {
    let script = common::write_script(&[
        "insert, FIFTY_PENCE",
        "power_off,",
        "insert, FIFTY_PENCE",
        "power_on,",
        "refund,",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("vending-machine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "3,insert,FIFTY_PENCE,rejected,£0.50,The machine is switched off.",
        ))
        .stdout(predicate::str::contains(
            "5,refund,,ok,£0.00,refunded £0.50 (1 x FIFTY_PENCE)",
        ));
}
