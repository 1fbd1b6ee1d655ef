use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing the sondeo test environment: a throwaway copy of
/// the demo project.
struct SondeoTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl SondeoTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let project_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .context("Workspace root not found")?
            .join("demos/comercio");

        let dest = tmp.path().join("comercio");
        Self::copy_dir(&project_root, &dest)?;

        Ok(Self {
            _tmp: tmp,
            root: dest,
        })
    }

    /// An empty directory, for `init` tests.
    fn bare() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().join("nuevo");
        std::fs::create_dir_all(&root)?;
        Ok(Self { _tmp: tmp, root })
    }

    fn copy_dir(src: &PathBuf, dst: &PathBuf) -> std::io::Result<()> {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.skip_exist = true;
        options.content_only = true;

        std::fs::create_dir_all(dst)?;
        fs_extra::dir::copy(src, dst, &options)
            .map(|_| ())
            .map_err(|e| std::io::Error::other(e.to_string()))
    }

    fn sondeo(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sondeo"));
        cmd.current_dir(&self.root);
        cmd
    }
}

#[test]
fn test_build_writes_workbook() -> Result<()> {
    let env = SondeoTestEnv::new()?;

    env.sondeo()
        .arg("build")
        .assert()
        .success()
        .stdout(predicates::str::contains("SUCCESS"));

    let artifact = env
        .root
        .join("target/encuesta_comercio_san_carlos_oeste_xlsform.xlsx");
    let bytes = std::fs::read(&artifact)
        .with_context(|| format!("workbook not written at {:?}", artifact))?;
    // xlsx is a zip container.
    assert_eq!(&bytes[..2], b"PK");
    Ok(())
}

#[test]
fn test_build_respects_explicit_out_path() -> Result<()> {
    let env = SondeoTestEnv::new()?;

    env.sondeo()
        .arg("build")
        .arg("--out")
        .arg("salida/forma.xlsx")
        .assert()
        .success();

    assert!(env.root.join("salida/forma.xlsx").exists());
    Ok(())
}

#[test]
fn test_build_fails_on_self_referencing_rule() -> Result<()> {
    let env = SondeoTestEnv::new()?;

    // Poisoning: a rule whose target is its own source.
    let snapshot_path = env.root.join("snapshot.json");
    let mut snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path)?)?;
    snapshot["visibility_rules"]
        .as_array_mut()
        .context("visibility_rules missing")?
        .push(serde_json::json!({
            "target": "tipo_local",
            "source": "tipo_local",
            "operator": "equals",
            "values": ["Bar"]
        }));
    std::fs::write(&snapshot_path, serde_json::to_string_pretty(&snapshot)?)?;

    env.sondeo()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicates::str::contains("uses itself"));

    assert!(!env.root.join("target").join("encuesta_comercio_san_carlos_oeste_xlsform.xlsx").exists());
    Ok(())
}

#[test]
fn test_catalog_add_then_list() -> Result<()> {
    let env = SondeoTestEnv::new()?;

    env.sondeo()
        .args([
            "catalog",
            "add",
            "--canton",
            "Alajuela",
            "--distritos",
            "Alajuela Centro,San Rafael",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 distrito(s)"));

    env.sondeo()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("alajuela_centro"))
        .stdout(predicates::str::contains("san_rafael"));
    Ok(())
}

#[test]
fn test_preview_lists_cascading_choices() -> Result<()> {
    let env = SondeoTestEnv::new()?;

    env.sondeo()
        .args(["preview", "--sheet", "choices"])
        .assert()
        .success()
        .stdout(predicates::str::contains("list_distrito"))
        .stdout(predicates::str::contains("san_isidro_de_el_general"))
        .stdout(predicates::str::contains("canton_key"));
    Ok(())
}

#[test]
fn test_init_scaffolds_a_buildable_project() -> Result<()> {
    let env = SondeoTestEnv::bare()?;

    env.sondeo()
        .args(["init", "--delegacion", "Barrio Escalante"])
        .assert()
        .success();

    assert!(env.root.join("sondeo.yaml").exists());
    assert!(env.root.join("snapshot.json").exists());
    assert!(env.root.join("catalog/san_carlos.yaml").exists());

    // Refuses to scribble over an existing project.
    env.sondeo().arg("init").assert().failure();

    env.sondeo().arg("build").assert().success();
    Ok(())
}

#[test]
fn test_validate_warnings_snapshot() -> Result<()> {
    let env = SondeoTestEnv::bare()?;

    env.sondeo().arg("init").assert().success();
    // Empty the catalog so the cascade warning fires.
    std::fs::remove_file(env.root.join("catalog/san_carlos.yaml"))?;

    let output = env.sondeo().arg("validate").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    insta::assert_snapshot!("validate_warnings", stdout);
    Ok(())
}
