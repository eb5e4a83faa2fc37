use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

use msm_scaffold::templating::EmbeddedStore;
use msm_scaffold::test_utils::{TemplateFixture, write_template_dir};

use crate::common::Cli;

#[test]
fn test_new_creates_project() {
    let cli = Cli::new();
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("fs-peptide");

    cli.command()
        .arg("new")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created MSM project"))
        .stdout(predicate::str::contains("31 files, 10 directories"));

    assert!(project.join("README.md").is_file());
    assert!(project.join("analysis/landmarks/tica/cluster/msm/msm-1-timescales.py").is_file());
}

#[test]
fn test_new_with_ipynb_flag() {
    let cli = Cli::new();
    let temp = TempDir::new().unwrap();

    cli.command().arg("new").arg(temp.path()).arg("--ipynb").assert().success();

    assert!(temp.path().join("analysis/rmsd/rmsd.ipynb").is_file());
    assert!(!temp.path().join("analysis/rmsd/rmsd.py").exists());
}

#[test]
fn test_config_file_enables_notebooks_and_output_dir() {
    let cli = Cli::new();
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("from-config");
    fs::write(cli.config_path(), format!("ipynb = true\noutput_dir = {:?}\n", output.display().to_string()))
        .unwrap();

    cli.command().arg("new").assert().success();

    assert!(output.join("0-test-install.ipynb").is_file());
}

#[test]
fn test_new_with_template_dir() {
    let cli = Cli::new();
    let templates = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    // Same names as the bundled set, different text.
    let fixtures: Vec<_> = EmbeddedStore::names()
        .map(|name| TemplateFixture::new(name, "custom {{header}}\n"))
        .collect();
    write_template_dir(templates.path(), &fixtures).unwrap();

    cli.command()
        .arg("new")
        .arg(target.path())
        .arg("--template-dir")
        .arg(templates.path())
        .assert()
        .success();

    let readme = fs::read_to_string(target.path().join("README.md")).unwrap();
    assert!(readme.starts_with("custom "));
}

#[test]
fn test_template_dir_help_describes_block_format() {
    Cli::new()
        .command()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be closed by another `----` line"));
}

#[test]
fn test_msmbuilder_style_block_is_rejected_with_hint() {
    let cli = Cli::new();
    let templates = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let mut fixtures: Vec<_> = EmbeddedStore::names()
        .map(|name| TemplateFixture::new(name, "{{header}}\n"))
        .collect();
    fixtures[0].body = "\"\"\"Meta\n----\ndepends:\n  - trajs\n\"\"\"\n".to_string();
    write_template_dir(templates.path(), &fixtures).unwrap();

    cli.command()
        .arg("new")
        .arg(target.path())
        .arg("--template-dir")
        .arg(templates.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no closing '----' line"))
        .stderr(predicate::str::contains("Meta"));
}

#[test]
fn test_layout_text() {
    Cli::new()
        .command()
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("(project root)"))
        .stdout(predicate::str::contains("analysis/"))
        .stdout(predicate::str::contains("← ftrajs, meta.pandas.pickl"));
}

#[test]
fn test_layout_json() {
    let output = Cli::new().command().args(["layout", "--format", "json"]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["name"], "");
    assert_eq!(json["children"][0]["name"], "analysis");
    assert_eq!(json["children"][0]["depends"], serde_json::json!(["trajs", "top.pdb"]));
}

#[test]
fn test_render_to_stdout() {
    Cli::new()
        .command()
        .args(["render", "tica/tica.py", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("please cite msmbuilder"))
        .stdout(predicate::str::contains("Meta\n----").not());
}

#[test]
fn test_render_writes_into_current_directory() {
    let temp = TempDir::new().unwrap();

    Cli::new()
        .command()
        .current_dir(temp.path())
        .args(["render", "tica/cluster/cluster.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("ttrajs, meta.pandas.pickl"));

    assert!(temp.path().join("cluster.py").is_file());
}

#[test]
fn test_render_unknown_template_fails() {
    Cli::new()
        .command()
        .args(["render", "nope.py", "--stdout"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nope.py"));
}

#[test]
fn test_bad_config_fails() {
    let cli = Cli::new();
    fs::write(cli.config_path(), "ipynb = \"sometimes\"\n").unwrap();

    cli.command().arg("layout").assert().failure().code(1);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    Cli::new().command().args(["-v", "-q", "layout"]).assert().failure();
}
