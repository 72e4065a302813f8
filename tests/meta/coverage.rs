//! Checks that the unit test tree mirrors the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Crate roots and module files only wire modules together
    fn is_wiring(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn mirrored(dir: &str) -> BTreeSet<PathBuf> {
        let base = Path::new(dir);
        rust_files(base)
            .unwrap_or_else(|error| unreachable!("Failed to read {dir}: {error}"))
            .into_iter()
            .filter(|path| !is_wiring(path))
            .filter_map(|path| path.strip_prefix(base).ok().map(Path::to_path_buf))
            .collect()
    }

    // Tests every source file has a mirrored unit test file
    // Verified by deleting a unit test file
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = mirrored(UNIT_DIR);

        let missing: Vec<String> = mirrored(SRC_DIR)
            .difference(&tests)
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file mirrors a source file
    // Verified by adding a unit test file with no source
    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = mirrored(SRC_DIR);

        let orphaned: Vec<String> = mirrored(UNIT_DIR)
            .difference(&sources)
            .map(|path| format!("  - tests/unit/{0} (no src/{0})", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests test files contain at least one test
    // Verified by adding a test file without #[test]
    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new(TESTS_DIR))
            .unwrap_or_else(|error| unreachable!("Failed to scan {TESTS_DIR}: {error}"));

        let empty: Vec<String> = files
            .iter()
            .filter(|path| !is_wiring(path))
            .filter(|path| {
                fs::read_to_string(path).map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    // Tests every file under tests/ opens with a module doc comment
    // Verified by removing the //! line from a test file
    #[test]
    fn test_test_files_are_documented() {
        let files = rust_files(Path::new(TESTS_DIR))
            .unwrap_or_else(|error| unreachable!("Failed to scan {TESTS_DIR}: {error}"));

        let undocumented: Vec<String> = files
            .iter()
            .filter(|path| {
                fs::read_to_string(path).map_or(true, |content| !content.starts_with("//!"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            undocumented.is_empty(),
            "Test files without a module doc comment:\n{}",
            undocumented.join("\n")
        );
    }
}
