use anyhow::Context;
use notesearch_core::EngineConfig;
use notesearch_engine::Engine;
use std::path::Path;

/// Read the engine config, falling back to defaults when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = EngineConfig::from_json(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Read a plain-text file. Invalid UTF-8 is replaced rather than rejected,
/// and line endings are normalized to `\n`.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(file = %path.display(), "file is not valid UTF-8, replacing bad bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Document name for a path: its file name
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Register one file with the engine
pub fn register_file(engine: &mut Engine, path: &Path) -> anyhow::Result<String> {
    let name = document_name(path);
    let text = read_text(path)?;
    engine
        .register_document(&name, &text)
        .with_context(|| format!("indexing {}", path.display()))?;
    Ok(name)
}

/// Build an engine holding every file in `paths`
pub fn load_engine(config: EngineConfig, paths: &[impl AsRef<Path>]) -> anyhow::Result<Engine> {
    let mut engine = Engine::new(config);
    for path in paths {
        register_file(&mut engine, path.as_ref())?;
    }
    Ok(engine)
}
