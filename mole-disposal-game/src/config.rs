//! Session configuration: titles, scene names, lives and end-screen messages.
use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_STARTING_LIVES;

/// Errors raised when session configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionConfigError {
    #[error("at least one level scene is required")]
    NoLevels,
    #[error("{field} must name a scene")]
    BlankScene { field: &'static str },
    #[error("level scene {index} must name a scene")]
    BlankLevelScene { index: usize },
}

/// Presentation and progression settings for a session.
///
/// Every field has a default so partial JSON documents load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "SessionConfig::default_title")]
    pub title: String,
    #[serde(default = "SessionConfig::default_credit")]
    pub credit: String,
    #[serde(default = "SessionConfig::default_help_title")]
    pub help_title: String,
    #[serde(default = "SessionConfig::default_help_text")]
    pub help_text: String,
    #[serde(default = "SessionConfig::default_starting_lives")]
    pub starting_lives: u32,
    /// Ordered scene names, one per level.
    #[serde(default = "SessionConfig::default_level_scenes")]
    pub level_scenes: Vec<String>,
    #[serde(default = "SessionConfig::default_start_scene")]
    pub start_scene: String,
    #[serde(default = "SessionConfig::default_game_over_scene")]
    pub game_over_scene: String,
    #[serde(default = "SessionConfig::default_help_scene")]
    pub help_scene: String,
    #[serde(default = "SessionConfig::default_end_message")]
    pub default_end_message: String,
    #[serde(default = "SessionConfig::default_lose_message")]
    pub lose_message: String,
    #[serde(default = "SessionConfig::default_win_message")]
    pub win_message: String,
}

impl SessionConfig {
    fn default_title() -> String {
        "Mole Disposal".to_string()
    }

    fn default_credit() -> String {
        "Made by: Andrew Nguyen".to_string()
    }

    fn default_help_title() -> String {
        "How to Play".to_string()
    }

    fn default_help_text() -> String {
        "Help Vivian beat back the moles! Move next to a mole and attack it. \
         You must attack in the order displayed at the beginning of the level, \
         but you get three tries. The sequence gets harder as levels go on."
            .to_string()
    }

    const fn default_starting_lives() -> u32 {
        DEFAULT_STARTING_LIVES
    }

    fn default_level_scenes() -> Vec<String> {
        vec![
            "Level1".to_string(),
            "Level2".to_string(),
            "Level3".to_string(),
        ]
    }

    fn default_start_scene() -> String {
        "StartMenu".to_string()
    }

    fn default_game_over_scene() -> String {
        "GameOver".to_string()
    }

    fn default_help_scene() -> String {
        "Help".to_string()
    }

    fn default_end_message() -> String {
        "Game Over".to_string()
    }

    fn default_lose_message() -> String {
        "Oh no...".to_string()
    }

    fn default_win_message() -> String {
        "Right on!".to_string()
    }

    /// Parse configuration from JSON without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse and validate configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails validation.
    pub fn load(json: &str) -> anyhow::Result<Self> {
        let config = Self::from_json(json).context("parsing session config")?;
        config.validate().context("validating session config")?;
        Ok(config)
    }

    /// Replace the level list with `count` generated scene names (`Level1`, `Level2`, ...).
    #[must_use]
    pub fn with_level_count(mut self, count: usize) -> Self {
        self.level_scenes = (1..=count).map(|n| format!("Level{n}")).collect();
        self
    }

    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Number of levels in a session.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.level_scenes.len()
    }

    /// Scene for a 1-based level index.
    #[must_use]
    pub fn level_scene(&self, level: u32) -> Option<&str> {
        let index = usize::try_from(level.checked_sub(1)?).ok()?;
        self.level_scenes.get(index).map(String::as_str)
    }

    /// Check that every scene reference is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.level_scenes.is_empty() {
            return Err(SessionConfigError::NoLevels);
        }
        if let Some(index) = self
            .level_scenes
            .iter()
            .position(|scene| scene.trim().is_empty())
        {
            return Err(SessionConfigError::BlankLevelScene { index });
        }
        for (field, scene) in [
            ("start_scene", &self.start_scene),
            ("game_over_scene", &self.game_over_scene),
            ("help_scene", &self.help_scene),
        ] {
            if scene.trim().is_empty() {
                return Err(SessionConfigError::BlankScene { field });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            credit: Self::default_credit(),
            help_title: Self::default_help_title(),
            help_text: Self::default_help_text(),
            starting_lives: Self::default_starting_lives(),
            level_scenes: Self::default_level_scenes(),
            start_scene: Self::default_start_scene(),
            game_over_scene: Self::default_game_over_scene(),
            help_scene: Self::default_help_scene(),
            default_end_message: Self::default_end_message(),
            lose_message: Self::default_lose_message(),
            win_message: Self::default_win_message(),
        }
    }
}
