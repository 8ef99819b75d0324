use std::fs;
use std::path::Path;

pub fn run(dir: &Path, character: &str, output: Option<&Path>) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let session = super::open_session(&store, character)?;

    let json = serde_json::to_string_pretty(session.sheet())
        .map_err(|e| format!("JSON serialization failed: {e}"))?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
            eprintln!("  Exported {} to {}", session.name(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
