use anyhow::Result;
use file_relocator::config::JobOverrides;
use file_relocator::{list_dir_names, FileSource, RelocateError, RelocationJob, TomlConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Mirrors a package split: the listing tree names the classes to pull out of the
/// monolithic source tree.
fn setup_split_layout(root: &Path) -> Result<()> {
    let listing = root.join("api").join("com").join("google").join("protobuf");
    let source = root.join("src").join("com").join("google").join("protobuf");
    fs::create_dir_all(&listing)?;
    fs::create_dir_all(&source)?;

    for name in ["CodedInputStream.java", "MapEntry.java"] {
        fs::write(listing.join(name), "")?;
    }
    for name in ["CodedInputStream.java", "MapEntry.java", "ArrayEncoder.java"] {
        fs::write(source.join(name), format!("class {}", name))?;
    }
    Ok(())
}

fn job_toml(root: &Path) -> String {
    // TOML 字串中避免 Windows 反斜杠
    let root = root.to_string_lossy().replace('\\', "/");
    format!(
        r#"
[relocation]
source_dir = "{root}/src/com/google/protobuf"
destination_dir = "{root}/out/com/google/protobuf"
list_from = "{root}/api/com/google/protobuf"

[logging]
level = "debug"
"#
    )
}

#[test]
fn test_list_from_job_moves_listed_names_only() -> Result<()> {
    let temp = TempDir::new()?;
    setup_split_layout(temp.path())?;

    let config = TomlConfig::from_toml_str(&job_toml(temp.path()))?;
    let job = RelocationJob::resolve(Some(config), JobOverrides::default())?;
    job.run()?;

    let out = temp.path().join("out/com/google/protobuf");
    let src = temp.path().join("src/com/google/protobuf");
    assert_eq!(
        list_dir_names(&out)?,
        vec!["CodedInputStream.java", "MapEntry.java"]
    );
    assert_eq!(list_dir_names(&src)?, vec!["ArrayEncoder.java"]);
    assert_eq!(
        fs::read_to_string(out.join("MapEntry.java"))?,
        "class MapEntry.java"
    );
    Ok(())
}

#[test]
fn test_job_file_with_cli_override() -> Result<()> {
    let temp = TempDir::new()?;
    setup_split_layout(temp.path())?;
    let config_path = temp.path().join("relocate.toml");
    fs::write(&config_path, job_toml(temp.path()))?;

    let overrides = JobOverrides {
        files: vec!["ArrayEncoder.java".to_string()],
        ..Default::default()
    };
    let job = RelocationJob::resolve(Some(TomlConfig::from_file(&config_path)?), overrides)?;
    assert_eq!(
        job.files,
        FileSource::Explicit(vec!["ArrayEncoder.java".to_string()])
    );

    job.run()?;

    let out = temp.path().join("out/com/google/protobuf");
    assert_eq!(list_dir_names(&out)?, vec!["ArrayEncoder.java"]);
    Ok(())
}

#[test]
fn test_listed_name_missing_from_source() -> Result<()> {
    let temp = TempDir::new()?;
    setup_split_layout(temp.path())?;
    fs::write(
        temp.path().join("api/com/google/protobuf/Unknown.java"),
        "",
    )?;

    let config = TomlConfig::from_toml_str(&job_toml(temp.path()))?;
    let job = RelocationJob::resolve(Some(config), JobOverrides::default())?;
    let err = job.run().unwrap_err();

    assert!(matches!(err, RelocateError::NotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    // sorted listing: both known classes come before Unknown.java
    let out = temp.path().join("out/com/google/protobuf");
    assert_eq!(
        list_dir_names(&out)?,
        vec!["CodedInputStream.java", "MapEntry.java"]
    );
    Ok(())
}

#[test]
fn test_missing_listing_directory() -> Result<()> {
    let temp = TempDir::new()?;
    let job = RelocationJob::new(
        temp.path().join("src"),
        temp.path().join("dst"),
        FileSource::ListDir(temp.path().join("no-listing")),
    );

    let err = job.run().unwrap_err();
    assert!(matches!(err, RelocateError::NotFound { .. }));
    Ok(())
}
