use crate::commands::load::{document_name, load_engine};
use anyhow::Context;
use notesearch_core::EngineConfig;
use std::path::Path;

pub fn run(config: EngineConfig, file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let engine = load_engine(config, &[file])?;
    let rendered = engine.study_notes(&document_name(file))?.render();

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("✓ Wrote study notes to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_written_to_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("lecture.txt");
        let output = temp.path().join("summary_lecture.txt");
        std::fs::write(
            &input,
            "Entropy is defined as expected surprise.\n- measured in bits\nH = -sum p log p",
        )
        .unwrap();

        run(EngineConfig::default(), &input, Some(&output)).unwrap();

        let notes = std::fs::read_to_string(&output).unwrap();
        assert!(notes.contains("Original File: lecture.txt"));
        assert!(notes.contains("Entropy: expected surprise"));
        assert!(notes.contains("- measured in bits"));
    }

    #[test]
    fn test_notes_unwritable_output() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("lecture.txt");
        std::fs::write(&input, "Some lecture text.").unwrap();
        let output = temp.path().join("missing-dir").join("notes.txt");

        let err = run(EngineConfig::default(), &input, Some(&output)).unwrap_err();
        assert!(err.to_string().starts_with("writing "));
    }

    #[test]
    fn test_notes_missing_file() {
        let result = run(
            EngineConfig::default(),
            Path::new("/nonexistent/notes.txt"),
            None,
        );
        assert!(result.is_err());
    }
}
