use anyhow::{Context, Result, bail};
use flagparse::{ArgumentsConfig, FlagSettings, OptionSettings, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEFINITIONS_NAME: &str = "flagparse.json";

/// Load definitions from `path`, or from `flagparse.json` in the current
/// directory when no path is given.
///
/// A missing default file is not an error (`Ok(None)`); a missing explicit
/// path is.
pub fn load_definitions(path: Option<&Path>) -> Result<Option<ArgumentsConfig>> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let (path, explicit) = match path {
        Some(p) => (resolve_against(&cwd, p), true),
        None => (cwd.join(DEFAULT_DEFINITIONS_NAME), false),
    };

    if !path.exists() {
        if explicit {
            bail!("definitions not found: {}", path.display());
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read definitions: {}", path.display()))?;
    let config: ArgumentsConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse definitions JSON: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        flags = config.flags.len(),
        options = config.options.len(),
        "loaded definitions"
    );
    Ok(Some(config))
}

/// Built-in definitions used when no file is available.
pub fn demo_definitions(cache_dir: &Path) -> ArgumentsConfig {
    let flag = |name: &str, short: Option<&str>, description: &str| FlagSettings {
        name: name.to_string(),
        short: short.map(str::to_string),
        description: description.to_string(),
        ..Default::default()
    };

    ArgumentsConfig {
        strict: false,
        flags: vec![
            flag("verbose", Some("v"), "Turn on verbose output"),
            flag("version", None, "Display the version"),
            flag("quiet", Some("q"), "Disable all output"),
            flag("help", Some("h"), "Show this help screen"),
        ],
        options: vec![
            OptionSettings {
                name: "cache".to_string(),
                short: Some("C".to_string()),
                default: Value::from(cache_dir.display().to_string()),
                description: "Set the cache directory".to_string(),
                ..Default::default()
            },
            OptionSettings {
                name: "name".to_string(),
                short: Some("n".to_string()),
                default: Value::from("James"),
                description: "Set a name with a really long description and a default so we can \
                              see what line wrapping looks like"
                    .to_string(),
                ..Default::default()
            },
        ],
    }
}

pub fn write_default_definitions(project_dir: &Path, overwrite: bool) -> Result<PathBuf> {
    let dest = project_dir.join(DEFAULT_DEFINITIONS_NAME);
    if dest.exists() && !overwrite {
        bail!("{} already exists (use --force to replace it)", dest.display());
    }

    let config = demo_definitions(Path::new("."));
    let bytes = serde_json::to_vec_pretty(&config).context("failed to serialize definitions")?;
    let mut out = String::from_utf8(bytes).context("definitions are not valid UTF-8")?;
    out.push('\n');

    let tmp = dest.with_extension("tmp");
    fs::write(&tmp, out.as_bytes())
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    if overwrite && dest.exists() {
        fs::remove_file(&dest).with_context(|| format!("failed to remove {}", dest.display()))?;
    }
    fs::rename(&tmp, &dest)
        .with_context(|| format!("failed to move {} into place", dest.display()))?;
    Ok(dest)
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
