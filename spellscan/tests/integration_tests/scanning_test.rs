// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_project};
use anyhow::Result;
use spellscan::{Patterns, ScanOptions, scan_directories};
use tempfile::TempDir;

#[test]
fn test_project_scan_order() -> Result<()> {
    let temp_dir = setup_project()?;
    let root = temp_dir.path().join("proj");

    let dirs = scan_directories(&root, &ScanOptions::new("go"))?;

    assert_eq!(dirs, vec![root.join("a"), root.join("b/c")]);
    Ok(())
}

#[test]
fn test_trailing_separator_on_root() -> Result<()> {
    let temp_dir = setup_project()?;
    let root = temp_dir.path().join("proj");
    let options = ScanOptions::new("go");

    let with_slash = scan_directories(&root.join(""), &options)?;
    assert_eq!(with_slash, vec![root.join("a"), root.join("b/c")]);
    Ok(())
}

#[test]
fn test_qualifying_directories_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "main.go", "")?;
    create_test_file(root, "docs/guide.md", "")?;
    create_test_file(root, "docs/api/handler.go", "")?;
    create_test_file(root, "pkg/one.go", "")?;
    create_test_file(root, "pkg/two.go", "")?;
    create_test_file(root, "pkg/testdata/fixture.json", "")?;

    let dirs = scan_directories(root, &ScanOptions::new("go"))?;

    assert_eq!(
        dirs,
        vec![
            root.to_path_buf(),
            root.join("docs/api"),
            root.join("pkg"),
        ],
        "Root, docs/api and pkg each hold .go files directly"
    );
    Ok(())
}

#[test]
fn test_other_extension() -> Result<()> {
    let temp_dir = setup_project()?;
    let root = temp_dir.path().join("proj");

    let dirs = scan_directories(&root, &ScanOptions::new("md"))?;
    assert_eq!(dirs, vec![root.join("b")]);
    Ok(())
}

#[test]
fn test_exclusions_with_negation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "cmd/main.go", "")?;
    create_test_file(root, "gen/api.pb.go", "")?;
    create_test_file(root, "gen/keep.go", "")?;
    create_test_file(root, "vendor/dep/dep.go", "")?;

    let patterns = Patterns::from_lines(["/vendor/", "*.pb.go", "# generated code"])?;
    let options = ScanOptions {
        exclude: Some(&patterns),
        ..ScanOptions::new("go")
    };

    let dirs = scan_directories(root, &options)?;
    assert_eq!(dirs, vec![root.join("cmd"), root.join("gen")]);

    let patterns = Patterns::from_lines(["gen/*.go", "!gen/keep.go", "vendor/"])?;
    let options = ScanOptions {
        exclude: Some(&patterns),
        ..ScanOptions::new("go")
    };
    let dirs = scan_directories(root, &options)?;
    assert_eq!(dirs, vec![root.join("cmd"), root.join("gen")]);
    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = scan_directories(&temp_dir.path().join("nope"), &ScanOptions::new("go"));
    assert!(result.is_err());
    Ok(())
}
