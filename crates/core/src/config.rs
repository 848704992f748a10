use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::level::Level;
use crate::params::Params;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub params: Params,
    pub level: Level,
    /// Follow-on page offered by the win popup.
    pub next_href: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: Params::default(),
            level: Level::default(),
            next_href: "next.html".to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(src: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.params;
        let l = &self.level;

        if p.surface_w <= 0.0 || p.surface_h <= 0.0 {
            return invalid("surface must have positive size");
        }
        if p.ground_offset < 0.0 || p.ground_offset >= p.surface_h {
            return invalid("ground offset must lie inside the surface");
        }
        if p.move_speed <= 0.0 {
            return invalid("move_speed must be positive");
        }
        if p.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if p.jump_velocity >= 0.0 {
            return invalid("jump_velocity must point up (negative)");
        }
        if p.char_w <= 0.0 || p.char_h <= 0.0 {
            return invalid("character box must have positive size");
        }
        if p.total_frames == 0 || p.anim_speed == 0 {
            return invalid("sprite strip needs at least one frame and a non-zero cadence");
        }
        if l.gap.is_empty() {
            return invalid("gap span is empty");
        }
        if l.gap.start < 0.0 || l.gap.end > p.surface_w {
            return invalid("gap must lie inside the surface");
        }
        if l.win_x < 0.0 || l.win_x > p.surface_w {
            return invalid("win line must lie inside the surface");
        }
        if l.gap.contains(p.spawn_x) {
            return invalid("spawn point is inside the gap");
        }
        if let Some(i) = l.shelves.iter().position(|s| s.w <= 0.0 || s.h <= 0.0) {
            return invalid(format!("shelf {i} has non-positive size"));
        }
        if let Some(i) = l.reveal_shelf {
            if i >= l.shelves.len() {
                return invalid(format!("reveal shelf {i} out of range"));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Result<()> {
    Err(Error::InvalidConfig(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::Error;

    #[test]
    fn empty_object_is_default() {
        let cfg = Config::from_json("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.next_href, "next.html");
    }

    #[test]
    fn rejects_upward_gravity() {
        let err = Config::from_json(r#"{"params": {"gravity": -1.0}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn rejects_dangling_reveal_shelf() {
        let err = Config::from_json(r#"{"level": {"shelves": [], "reveal_shelf": 1}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("reveal shelf 1"), "{err}");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Config::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
