use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::process::Command;

#[test]
fn reports_wrapped_factorial_at_reduced_count() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("fac-bench")?;
    cmd.arg("10");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Code with 10 iterations took:"))
        .stdout(predicate::str::contains("ms"))
        // 100! mod 2^64 is 0, so the truncated i32 print is 0 as well.
        .stdout(predicate::str::contains("fac(100) == 0"));

    Ok(())
}

#[test]
fn rejects_zero_iterations() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("fac-bench")?;
    cmd.arg("0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));

    Ok(())
}

#[test]
fn rejects_non_numeric_iterations() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("fac-bench")?;
    cmd.arg("lots");
    cmd.assert().failure();

    Ok(())
}
