use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn iac() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("iac")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn run_demo_prints_every_node() -> Result<(), Box<dyn Error>> {
    let assert = iac()?.args(["run", "--demo"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with("apple: 0.97"), "{}", lines[0]);
    assert!(stdout.contains("healthy: 0.97"));
    assert!(stdout.contains("milky way[central]: -0.97"));
    Ok(())
}

#[test]
fn run_demo_json() -> Result<(), Box<dyn Error>> {
    let assert = iac()?
        .args(["run", "--demo", "--cycles", "200", "--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;

    assert_eq!(json["cycles"], 200);
    let units = json["units"].as_array().expect("units array");
    let hubs = json["hubs"].as_array().expect("hubs array");
    assert_eq!(units.len(), 11);
    assert_eq!(hubs.len(), 6);
    assert_eq!(units[0]["name"], "apple");
    assert!(units[0]["activation"].as_f64().unwrap() > 0.95);

    let fruit = units.iter().find(|u| u["name"] == "fruit").unwrap();
    let candy = units.iter().find(|u| u["name"] == "candy").unwrap();
    assert!(fruit["activation"].as_f64().unwrap() > 0.0);
    assert!(candy["activation"].as_f64().unwrap() < 0.0);
    Ok(())
}

#[test]
fn run_input_override_retrieves_other_associates() -> Result<(), Box<dyn Error>> {
    // Replace apple's drive with snickers: junk and candy should win instead
    let assert = iac()?
        .args([
            "run", "--demo", "--format", "json",
            "--input", "apple=0",
            "--input", "snickers=1",
        ])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let units = json["units"].as_array().unwrap();
    let get = |name: &str| {
        units.iter().find(|u| u["name"] == name).unwrap()["activation"].as_f64().unwrap()
    };

    assert!(get("snickers") > 0.9);
    assert!(get("junk") > get("healthy"));
    assert!(get("candy") > get("fruit"));
    Ok(())
}

#[test]
fn run_zero_cycles_stays_at_rest() -> Result<(), Box<dyn Error>> {
    let assert = iac()?.args(["run", "--demo", "--cycles", "0"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.lines().all(|line| line.ends_with(": 0")), "{}", stdout);
    Ok(())
}

#[test]
fn run_from_file_with_trace() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let net = tmp.path().join("pets.toml");
    let trace = tmp.path().join("trace.json");
    fs::write(
        &net,
        r#"
pools = [["cat", "dog"], ["meow", "woof"]]

[links]
cat = ["meow"]
dog = ["woof"]

[run]
cycles = 40

[run.inputs]
dog = 1.0
"#,
    )?;

    let assert = iac()?
        .args(["run", net.to_str().unwrap(), "--trace", trace.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("woof: 0."));
    assert!(stdout.contains("cat[central]: "));

    let recorded: serde_json::Value = serde_json::from_str(&fs::read_to_string(&trace)?)?;
    assert_eq!(recorded["cycles"].as_array().unwrap().len(), 40);
    assert_eq!(recorded["labels"][4], "cat[central]");
    Ok(())
}

#[test]
fn run_unknown_input_fails() -> Result<(), Box<dyn Error>> {
    iac()?
        .args(["run", "--demo", "--input", "kiwi=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unit 'kiwi' not found"));
    Ok(())
}

#[test]
fn run_requires_a_source() -> Result<(), Box<dyn Error>> {
    iac()?
        .args(["run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("network file or --demo"));
    Ok(())
}

#[test]
fn run_rejects_duplicate_units() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let net = tmp.path().join("dup.toml");
    fs::write(&net, "pools = [[\"a\", \"b\"], [\"b\", \"c\"]]\n")?;

    iac()?
        .args(["run", net.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unit 'b' appears in pool 0 and pool 1"));
    Ok(())
}
