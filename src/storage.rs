//! Text artifact I/O: one abundance file per (R, B) pair.
//!
//! An artifact holds n newline-separated reals in increasing claim order and
//! is named `Results_<B>_<R>.txt`. Writes go to a `.tmp` sibling first and
//! are renamed into place, so parallel sweep tasks can never clobber or
//! interleave each other's output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::Params;

/// Format a parameter for a file name the short way: integral values lose
/// the trailing ".0" (1.0 → "1", 0.05 → "0.05", -3.0 → "-3").
pub fn format_param(value: f64) -> String {
    format!("{}", value)
}

/// Artifact file name for a parameter pair: `Results_<B>_<R>.txt`.
pub fn results_file_name(params: &Params) -> String {
    format!(
        "Results_{}_{}.txt",
        format_param(params.selection),
        format_param(params.reward)
    )
}

/// Write an abundance vector atomically under `dir`, creating it if needed.
///
/// The whole file is serialized, written to `<name>.tmp`, synced, and
/// renamed over the final path. Returns the final path.
pub fn save_abundance(dir: &Path, params: &Params, abundance: &[f64]) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let final_path = dir.join(results_file_name(params));
    let tmp_path = final_path.with_extension("txt.tmp");

    let mut contents = String::with_capacity(abundance.len() * 24);
    for value in abundance {
        contents.push_str(&format!("{value:.15e}\n"));
    }

    let mut f = fs::File::create(&tmp_path)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    fs::rename(&tmp_path, &final_path)?;
    Ok(final_path)
}

/// Read an abundance artifact back: one real per line, blank lines skipped.
pub fn load_abundance(path: &Path) -> std::io::Result<Vec<f64>> {
    let text = fs::read_to_string(path)?;
    let mut values = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f64>().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("bad abundance line {trimmed:?}: {e}"),
            )
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_formatting() {
        assert_eq!(
            results_file_name(&Params::new(2.0, 1.0)),
            "Results_1_2.txt"
        );
        assert_eq!(
            results_file_name(&Params::new(35.0, 0.05)),
            "Results_0.05_35.txt"
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let params = Params::new(2.0, 1.0);
        let abundance = vec![0.25, 0.125, 0.625];

        let path = save_abundance(dir.path(), &params, &abundance).unwrap();
        assert_eq!(path, dir.path().join("Results_1_2.txt"));

        let loaded = load_abundance(&path).unwrap();
        assert_eq!(loaded.len(), abundance.len());
        for (a, b) in abundance.iter().zip(loaded.iter()) {
            assert!((a - b).abs() < 1e-15);
        }
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let params = Params::new(5.0, 0.5);
        save_abundance(dir.path(), &params, &[1.0]).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Results_0.5_5.txt".to_string()]);
    }

    #[test]
    fn test_rewrite_replaces_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let params = Params::new(2.0, 1.0);
        save_abundance(dir.path(), &params, &[0.5, 0.5]).unwrap();
        let path = save_abundance(dir.path(), &params, &[0.25, 0.75]).unwrap();

        let loaded = load_abundance(&path).unwrap();
        assert!((loaded[0] - 0.25).abs() < 1e-15);
        assert!((loaded[1] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, "0.5\nnot-a-number\n").unwrap();
        let err = load_abundance(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
