#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The themes an app can switch between, in toggle order.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn is_dark(&self) -> bool)]
pub enum ThemeName {
    #[default]
    #[assoc(as_str = "dark")]
    #[assoc(is_dark = true)]
    Dark,
    /// Soft light theme.
    #[assoc(as_str = "neumorphism")]
    #[assoc(is_dark = false)]
    Neumorphism,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Dark, ThemeName::Neumorphism];

    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|theme| *theme == self)
            .unwrap_or_default();

        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownThemeError(s.to_owned()))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid theme: {0}")]
pub struct UnknownThemeError(pub String);
