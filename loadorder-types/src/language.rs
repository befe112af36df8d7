//! Language codes for message rendering.
//!
//! The language only tags emitted messages so the presentation layer can
//! render localized strings; it never influences ordering.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported message language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Russian,
    French,
    Chinese,
    Polish,
    BrazilianPortuguese,
    Finnish,
    German,
    Danish,
    Korean,
}

impl Language {
    /// Returns the ISO-style locale code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Russian => "ru",
            Language::French => "fr",
            Language::Chinese => "zh_CN",
            Language::Polish => "pl",
            Language::BrazilianPortuguese => "pt_BR",
            Language::Finnish => "fi",
            Language::German => "de",
            Language::Danish => "da",
            Language::Korean => "ko",
        }
    }

    /// Returns the language's English name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Russian => "Русский",
            Language::French => "Français",
            Language::Chinese => "简体中文",
            Language::Polish => "Polski",
            Language::BrazilianPortuguese => "Português do Brasil",
            Language::Finnish => "suomi",
            Language::German => "Deutsch",
            Language::Danish => "Dansk",
            Language::Korean => "한국어",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "ru" => Ok(Language::Russian),
            "fr" => Ok(Language::French),
            "zh_CN" => Ok(Language::Chinese),
            "pl" => Ok(Language::Polish),
            "pt_BR" => Ok(Language::BrazilianPortuguese),
            "fi" => Ok(Language::Finnish),
            "de" => Ok(Language::German),
            "da" => Ok(Language::Danish),
            "ko" => Ok(Language::Korean),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}
