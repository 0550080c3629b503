use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::{Result, SyntheticMapError};

///
/// Parameters of a synthetic nucleosome map.
///
/// Counts are signed so that out-of-range input from a config file or the
/// command line is reported as a configuration error rather than a parse
/// failure. [`SyntheticMapConfig::validate`] runs before any random draw.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticMapConfig {
    /// number of well-positioned nucleosomes
    pub wp_num: i64,
    /// number of well-positioned nucleosomes to delete (sampled with replacement)
    pub wp_del: i64,
    /// maximum jitter of well-positioned reads
    pub wp_var: i64,
    /// number of fuzzy nucleosomes
    pub fuz_num: i64,
    /// maximum jitter of fuzzy reads
    pub fuz_var: i64,
    /// maximum number of reads per nucleosome
    pub max_cover: i64,
    pub nuc_len: i64,
    pub lin_len: i64,
    pub seed: Option<u64>,
    /// also generate a control sample and the coverage ratio
    pub as_ratio: bool,
    /// reference name given to every synthetic read
    pub chrom: String,
}

impl Default for SyntheticMapConfig {
    fn default() -> Self {
        SyntheticMapConfig {
            wp_num: DEFAULT_WP_NUM,
            wp_del: DEFAULT_WP_DEL,
            wp_var: DEFAULT_WP_VAR,
            fuz_num: DEFAULT_FUZ_NUM,
            fuz_var: DEFAULT_FUZ_VAR,
            max_cover: DEFAULT_MAX_COVER,
            nuc_len: DEFAULT_NUC_LEN,
            lin_len: DEFAULT_LIN_LEN,
            seed: None,
            as_ratio: false,
            chrom: DEFAULT_CHROM.to_string(),
        }
    }
}

fn invalid(msg: String) -> SyntheticMapError {
    SyntheticMapError::Configuration(msg)
}

impl SyntheticMapConfig {
    ///
    /// Check every parameter range.
    ///
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("wp_num", self.wp_num),
            ("wp_del", self.wp_del),
            ("wp_var", self.wp_var),
            ("fuz_num", self.fuz_num),
            ("fuz_var", self.fuz_var),
            ("lin_len", self.lin_len),
        ] {
            if value < 0 {
                return Err(invalid(format!("{} must be >= 0, got {}", name, value)));
            }
        }

        if self.max_cover < 1 {
            return Err(invalid(format!(
                "max_cover must be >= 1, got {}",
                self.max_cover
            )));
        }
        if self.max_cover > u32::MAX as i64 {
            return Err(invalid(format!(
                "max_cover must be <= {}, got {}",
                u32::MAX,
                self.max_cover
            )));
        }
        if self.nuc_len < 1 {
            return Err(invalid(format!("nuc_len must be >= 1, got {}", self.nuc_len)));
        }
        // deletion indices are drawn over [0, wp_num]
        let deletion_slots = self.wp_num.saturating_add(1);
        if self.wp_del > deletion_slots {
            return Err(invalid(format!(
                "wp_del ({}) can't exceed wp_num + 1 ({})",
                self.wp_del, deletion_slots
            )));
        }
        if self.fuz_num > 0 && self.wp_num == 0 {
            return Err(invalid(
                "fuzzy nucleosomes are placed over the well-positioned span, so fuz_num > 0 needs wp_num > 0"
                    .to_string(),
            ));
        }
        if self.chrom.is_empty() {
            return Err(invalid("chrom can't be empty".to_string()));
        }

        // every read must stay addressable with 32-bit coordinates
        let furthest_end = self
            .nuc_len
            .checked_add(self.lin_len)
            .and_then(|spacing| self.wp_num.checked_mul(spacing))
            .and_then(|span| span.checked_add(self.wp_var.max(self.fuz_var)))
            .and_then(|span| span.checked_add(self.nuc_len));
        match furthest_end {
            Some(end) if end <= u32::MAX as i64 => {}
            _ => {
                return Err(invalid(
                    "the synthetic map doesn't fit in 32-bit coordinates".to_string(),
                ));
            }
        }

        Ok(())
    }

    ///
    /// Distance between consecutive well-positioned nucleosomes.
    ///
    pub fn spacing(&self) -> i64 {
        self.nuc_len + self.lin_len
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigFileType {
    Toml,
    Yaml,
    Json,
}

impl ConfigFileType {
    ///
    /// Determine the type of a config file based on its extension.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(ConfigFileType::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFileType::Yaml),
            Some("json") => Ok(ConfigFileType::Json),
            _ => Err(SyntheticMapError::InvalidConfigFileType),
        }
    }
}

impl TryFrom<&Path> for SyntheticMapConfig {
    type Error = SyntheticMapError;

    ///
    /// Load a config file. Missing keys fall back to their defaults; the
    /// result is validated.
    ///
    fn try_from(path: &Path) -> Result<Self> {
        let file_type = ConfigFileType::from_path(path)?;
        let raw = read_to_string(path)?;

        let config: SyntheticMapConfig = match file_type {
            ConfigFileType::Toml => toml::from_str(&raw)?,
            ConfigFileType::Yaml => serde_yaml::from_str(&raw)?,
            ConfigFileType::Json => serde_json::from_str(&raw)?,
        };
        config.validate()?;

        Ok(config)
    }
}
