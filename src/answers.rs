//! Answer record and license choices
//!
//! The [`AnswerRecord`] is produced once per run, either by the interactive
//! collector or from an answer file, and is read once by the renderer.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ReadmeError, Result};

/// License choices offered for the generated README
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum License {
    Mit,
    Apache,
    Gpl,
    Bsd,
    #[default]
    None,
}

impl License {
    /// All choices, in prompt order
    pub fn all() -> &'static [License] {
        &[
            License::Mit,
            License::Apache,
            License::Gpl,
            License::Bsd,
            License::None,
        ]
    }

    /// Display name, as offered to the operator
    pub fn name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache => "Apache",
            License::Gpl => "GPL",
            License::Bsd => "BSD",
            License::None => "None",
        }
    }

    /// Parse a license from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<License> {
        match name.trim().to_lowercase().as_str() {
            "mit" => Some(License::Mit),
            "apache" | "apache-2.0" => Some(License::Apache),
            "gpl" | "gplv3" | "gpl-3.0" => Some(License::Gpl),
            "bsd" | "bsd-3-clause" => Some(License::Bsd),
            "none" | "" => Some(License::None),
            _ => None,
        }
    }

    /// Whether an actual license applies
    pub fn is_licensed(&self) -> bool {
        !matches!(self, License::None)
    }

    /// shields.io badge markup, `None` for the unlicensed choice
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            License::Mit => Some(
                "[![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)",
            ),
            License::Apache => Some(
                "[![License: Apache](https://img.shields.io/badge/License-Apache_2.0-blue.svg)](https://opensource.org/licenses/Apache-2.0)",
            ),
            License::Gpl => Some(
                "[![License: GPL](https://img.shields.io/badge/License-GPLv3-blue.svg)](https://www.gnu.org/licenses/gpl-3.0)",
            ),
            License::Bsd => Some(
                "[![License: BSD](https://img.shields.io/badge/License-BSD_3--Clause-blue.svg)](https://opensource.org/licenses/BSD-3-Clause)",
            ),
            License::None => None,
        }
    }

    /// Body of the License section
    pub fn notice(&self) -> String {
        match self {
            License::None => "This project is not covered by any license.".to_string(),
            licensed => format!(
                "This project is licensed under the {} license.",
                licensed.name()
            ),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for License {
    type Err = ReadmeError;

    fn from_str(s: &str) -> Result<Self> {
        License::from_name(s).ok_or_else(|| ReadmeError::UnknownLicense(s.to_string()))
    }
}

impl TryFrom<String> for License {
    type Error = ReadmeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<License> for String {
    fn from(license: License) -> Self {
        license.name().to_string()
    }
}

/// Operator-supplied answers for every README field
///
/// Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub installation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: License,
    #[serde(deserialize_with = "null_as_default")]
    pub contributing: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tests: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnswerRecord {
    /// Load answers from a JSON file, or YAML when the extension is `.yaml`/`.yml`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let answer_err = |message: String| ReadmeError::AnswerFile {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| answer_err(e.to_string()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| answer_err(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| answer_err(e.to_string()))
        }
    }

    /// Set a text field by its question name
    ///
    /// Returns false for unknown names and for `license`, which is not free text.
    pub fn set_text(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "installation" => &mut self.installation,
            "usage" => &mut self.usage,
            "contributing" => &mut self.contributing,
            "tests" => &mut self.tests,
            "github" => &mut self.github,
            "email" => &mut self.email,
            _ => return false,
        };
        *slot = value;
        true
    }
}
