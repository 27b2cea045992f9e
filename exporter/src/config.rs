//! Settings file and the merge of file values with command line flags.

use std::path::Path;

use ksm_core::gltf::GltfSourceOptions;
use ksm_core::{BuilderConfig, ExportOptions};
use serde::Deserialize;

use crate::args::{CliCoincidence, ConvertArgs};

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub export: ExportSection,
}

/// The `[export]` table. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSection {
    pub smooth: bool,
    pub mesh: usize,
    pub coincidence: CliCoincidence,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            smooth: true,
            mesh: 0,
            coincidence: CliCoincidence::default(),
        }
    }
}

/// Parse settings from TOML text. `origin` names the source in error messages.
pub fn parse_settings(content: &str, origin: &Path) -> Result<SettingsFile, String> {
    toml::from_str(content).map_err(|e| format!("failed to parse {}: {e}", origin.display()))
}

/// Load a settings file.
pub fn load_settings(path: &Path) -> Result<SettingsFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse_settings(&content, path)
}

/// Everything a conversion needs, after flags have overridden file values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSettings {
    pub source: GltfSourceOptions,
    pub export: ExportOptions,
}

pub fn resolve(args: &ConvertArgs, file: &ExportSection) -> ConvertSettings {
    let coincidence = args.coincidence.unwrap_or(file.coincidence);
    ConvertSettings {
        source: GltfSourceOptions::default()
            .with_mesh(args.mesh.unwrap_or(file.mesh))
            .with_smooth(args.smooth_override().unwrap_or(file.smooth)),
        export: ExportOptions::default()
            .with_builder(BuilderConfig::default().with_coincidence(coincidence.into())),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ksm_core::CoincidenceStrategy;

    use super::*;

    fn convert_args() -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from("a.glb"),
            output: None,
            mesh: None,
            smooth: false,
            flat: false,
            coincidence: None,
            config: None,
        }
    }

    #[test]
    fn test_full_settings() {
        let settings = parse_settings(
            "[export]\nsmooth = false\nmesh = 3\ncoincidence = \"linear-scan\"\n",
            Path::new("export.toml"),
        )
        .unwrap();
        assert_eq!(
            settings.export,
            ExportSection {
                smooth: false,
                mesh: 3,
                coincidence: CliCoincidence::LinearScan,
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = parse_settings("[export]\nmesh = 1\n", Path::new("export.toml")).unwrap();
        assert!(settings.export.smooth);
        assert_eq!(settings.export.coincidence, CliCoincidence::SpatialHash);

        let empty = parse_settings("", Path::new("export.toml")).unwrap();
        assert_eq!(empty, SettingsFile::default());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = parse_settings("[export]\nsmoth = true\n", Path::new("export.toml")).unwrap_err();
        assert!(err.starts_with("failed to parse export.toml"));
    }

    #[test]
    fn test_load_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.toml");
        std::fs::write(&path, "[export]\nsmooth = false\n").unwrap();
        assert!(!load_settings(&path).unwrap().export.smooth);

        let missing = load_settings(&dir.path().join("missing.toml")).unwrap_err();
        assert!(missing.starts_with("failed to read"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = ExportSection {
            smooth: false,
            mesh: 4,
            coincidence: CliCoincidence::LinearScan,
        };

        let resolved = resolve(&convert_args(), &file);
        assert_eq!(resolved.source.mesh, 4);
        assert!(!resolved.source.smooth);
        assert_eq!(
            resolved.export.builder.coincidence,
            CoincidenceStrategy::LinearScan
        );

        let args = ConvertArgs {
            mesh: Some(0),
            smooth: true,
            coincidence: Some(CliCoincidence::SpatialHash),
            ..convert_args()
        };
        let resolved = resolve(&args, &file);
        assert_eq!(resolved.source.mesh, 0);
        assert!(resolved.source.smooth);
        assert_eq!(
            resolved.export.builder.coincidence,
            CoincidenceStrategy::SpatialHash
        );
    }
}
