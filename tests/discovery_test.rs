use anyhow::Result;
use hubgen::config::toml_config::GeneratorSettings;
use hubgen::core::Pipeline;
use hubgen::{DiscoveryPipeline, GeneratorConfig, GeneratorEngine, LocalStorage};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const OUTPUT_PATH: &str = "hub/gatus/config/config.yaml";

fn write_compose(root: &Path, dir: &str, content: &str) -> Result<()> {
    let dir = root.join(dir);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("docker-compose.yml"), content)?;
    Ok(())
}

fn service(name: &str, subdomain: &str) -> String {
    format!(
        r#"
services:
  {name}:
    image: example/{name}
    labels:
      - "traefik.enable=true"
      - "traefik.http.routers.{name}.rule=Host(`{subdomain}.${{DOMAIN_NAME}}`)"
"#
    )
}

fn run_discovery(root: &Path) -> Result<Value> {
    let pipeline = DiscoveryPipeline::new(
        LocalStorage::new(root),
        GeneratorConfig::new("example.com", GeneratorSettings::default()),
        root,
    );
    GeneratorEngine::new(pipeline).run()?;

    let content = fs::read_to_string(root.join(OUTPUT_PATH))?;
    Ok(serde_yaml::from_str(&content)?)
}

fn endpoint_names(doc: &Value) -> Vec<String> {
    doc["endpoints"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_endpoints_are_sorted_after_internal_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "a", &service("zeta", "zeta"))?;
    write_compose(root, "b/nested", &service("alpha", "alpha"))?;
    write_compose(root, "c", &service("mu", "mu"))?;

    let doc = run_discovery(root)?;
    assert_eq!(endpoint_names(&doc), vec!["gatus-internal", "Alpha", "Mu", "Zeta"]);

    let alpha = &doc["endpoints"][1];
    assert_eq!(alpha["group"].as_str(), Some("services"));
    assert_eq!(alpha["url"].as_str(), Some("https://alpha.${DOMAIN_NAME}"));
    assert_eq!(doc["endpoints"][0]["group"].as_str(), Some("core"));

    Ok(())
}

#[test]
fn test_duplicate_names_keep_first_in_sort_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "one", &service("whoami", "whoami"))?;
    write_compose(root, "two", &service("whoami-copy", "whoami"))?;

    let doc = run_discovery(root)?;
    assert_eq!(endpoint_names(&doc), vec!["gatus-internal", "Whoami"]);

    Ok(())
}

#[test]
fn test_malformed_file_does_not_block_others() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "broken", "services:\n  bad: [unclosed\n")?;
    write_compose(root, "good", &service("paperless", "paperless"))?;

    let doc = run_discovery(root)?;
    assert_eq!(endpoint_names(&doc), vec!["gatus-internal", "Paperless"]);

    Ok(())
}

#[test]
fn test_unusable_services_are_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(
        root,
        "mixed",
        r#"
services:
  disabled:
    labels:
      - "traefik.enable=false"
      - "traefik.http.routers.disabled.rule=Host(`disabled.${DOMAIN_NAME}`)"
  fixed-host:
    labels:
      - "traefik.enable=true"
      - "traefik.http.routers.fixed.rule=Host(`fixed.example.com`)"
  boolean-enable:
    labels:
      traefik.enable: true
      traefik.http.routers.boolean.rule: "Host(`boolean.${DOMAIN_NAME}`)"
  no-labels:
    image: postgres
  nextcloud:
    labels:
      traefik.enable: "true"
      traefik.http.routers.nextcloud.rule: "Host(`nextcloud.${DOMAIN_NAME}`)"
"#,
    )?;

    let doc = run_discovery(root)?;
    assert_eq!(endpoint_names(&doc), vec!["gatus-internal", "Nextcloud"]);

    Ok(())
}

#[test]
fn test_extract_returns_unfiltered_endpoints() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "x", &service("kuma", "kuma"))?;
    write_compose(root, "y", &service("kuma", "kuma"))?;

    let pipeline = DiscoveryPipeline::new(
        LocalStorage::new(root),
        GeneratorConfig::new("example.com", GeneratorSettings::default()),
        root,
    );

    assert_eq!(pipeline.extract()?.len(), 2);
    let rendered = pipeline.transform(pipeline.extract()?)?;
    assert_eq!(rendered.endpoints.len(), 1);
    assert_eq!(rendered.artifacts.len(), 1);
    assert_eq!(rendered.artifacts[0].path, OUTPUT_PATH);

    Ok(())
}

#[test]
fn test_empty_tree_still_writes_internal_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = run_discovery(temp_dir.path())?;
    assert_eq!(endpoint_names(&doc), vec!["gatus-internal"]);
    Ok(())
}

#[test]
fn test_binary_trims_domain_and_writes_under_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "hub/whoami", &service("whoami", "whoami"))?;

    let output = Command::new(env!("CARGO_BIN_EXE_discover_endpoints"))
        .current_dir(root)
        .env_remove("DOMAIN_NAME")
        .arg("  example.com  ")
        .arg("--root")
        .arg(root)
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 services with Traefik enabled."));
    assert!(stdout.contains("Generating Gatus config for domain: example.com\n"));
    assert!(root.join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_binary_without_domain_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_discover_endpoints"))
        .current_dir(temp_dir.path())
        .env_remove("DOMAIN_NAME")
        .arg("--root")
        .arg(temp_dir.path())
        .output()?;

    assert!(!output.status.success());
    assert!(!temp_dir.path().join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_binary_reads_domain_from_dotenv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::write(root.join(".env"), "DOMAIN_NAME=dotenv.example\n")?;
    write_compose(root, "apps/kuma", &service("kuma", "kuma"))?;

    let output = Command::new(env!("CARGO_BIN_EXE_discover_endpoints"))
        .current_dir(root)
        .env_remove("DOMAIN_NAME")
        .arg("--root")
        .arg(root)
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating Gatus config for domain: dotenv.example\n"));
    assert!(root.join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_binary_dry_run_leaves_tree_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_compose(root, "apps/nextcloud", &service("nextcloud", "nextcloud"))?;

    let output = Command::new(env!("CARGO_BIN_EXE_discover_endpoints"))
        .current_dir(root)
        .env("DOMAIN_NAME", "example.com")
        .arg("--root")
        .arg(root)
        .arg("--dry-run")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("--- {} ---\n", OUTPUT_PATH)));
    assert!(stdout.contains("  - name: Nextcloud\n"));
    assert!(stdout.contains("url: \"https://nextcloud.${DOMAIN_NAME}\""));
    assert!(!root.join("hub").exists());

    Ok(())
}
