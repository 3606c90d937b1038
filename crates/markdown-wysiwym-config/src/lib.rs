use markdown_wysiwym_engine::persistence::DEFAULT_METADATA_DIR;
use markdown_wysiwym_engine::{ParserOptions, SpanGroup, SpanKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Text attributes applied to one group of spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Treatment {
    pub dim: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub crossed_out: bool,
}

impl Treatment {
    /// Attributes set in either treatment.
    #[must_use]
    pub fn union(self, other: Treatment) -> Treatment {
        Treatment {
            dim: self.dim || other.dim,
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            crossed_out: self.crossed_out || other.crossed_out,
        }
    }
}

/// Per-group treatments, the `[treatments]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Treatments {
    pub marker: Treatment,
    pub content: Treatment,
    pub code: Treatment,
    pub link: Treatment,
    pub meta: Treatment,
    pub block: Treatment,
}

impl Default for Treatments {
    fn default() -> Self {
        Self {
            marker: Treatment {
                dim: true,
                ..Treatment::default()
            },
            content: Treatment::default(),
            code: Treatment::default(),
            link: Treatment {
                underline: true,
                ..Treatment::default()
            },
            meta: Treatment {
                italic: true,
                ..Treatment::default()
            },
            block: Treatment::default(),
        }
    }
}

impl Treatments {
    pub fn for_group(&self, group: SpanGroup) -> Treatment {
        match group {
            SpanGroup::Marker => self.marker,
            SpanGroup::Content => self.content,
            SpanGroup::Code => self.code,
            SpanGroup::Link => self.link,
            SpanGroup::Meta => self.meta,
            SpanGroup::Block => self.block,
        }
    }
}

fn default_metadata_dir() -> String {
    DEFAULT_METADATA_DIR.to_string()
}

fn default_calendar_glyph() -> String {
    ParserOptions::DEFAULT_CALENDAR_GLYPH.to_string()
}

fn default_recurrence_glyph() -> String {
    ParserOptions::DEFAULT_RECURRENCE_GLYPH.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,
    /// Folder under `notes_path` holding per-document metadata sidecars.
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: String,
    #[serde(default = "default_calendar_glyph")]
    pub calendar_glyph: String,
    #[serde(default = "default_recurrence_glyph")]
    pub recurrence_glyph: String,
    #[serde(default)]
    pub treatments: Treatments,
}

impl Config {
    pub fn new(notes_path: PathBuf) -> Self {
        Self {
            notes_path,
            metadata_dir: default_metadata_dir(),
            calendar_glyph: default_calendar_glyph(),
            recurrence_glyph: default_recurrence_glyph(),
            treatments: Treatments::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded config path
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-wysiwym");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Span parser options carrying the configured metadata glyphs.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            calendar_glyph: self.calendar_glyph.clone(),
            recurrence_glyph: self.recurrence_glyph.clone(),
        }
    }

    /// Treatment for one span kind: its group's treatment plus the attribute
    /// the construct itself stands for.
    pub fn treatment_for(&self, kind: SpanKind) -> Treatment {
        let intrinsic = match kind {
            SpanKind::HeadingContent(_) | SpanKind::BoldContent => Treatment {
                bold: true,
                ..Treatment::default()
            },
            SpanKind::ItalicContent => Treatment {
                italic: true,
                ..Treatment::default()
            },
            SpanKind::StrikeContent => Treatment {
                crossed_out: true,
                ..Treatment::default()
            },
            SpanKind::UnderlineContent => Treatment {
                underline: true,
                ..Treatment::default()
            },
            _ => Treatment::default(),
        };
        self.treatments.for_group(kind.group()).union(intrinsic)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
