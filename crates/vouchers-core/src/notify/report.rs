//! Final document assembly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::ValidityRange;
use super::segments::NotificationSegment;
use crate::models::config::NotificationConfig;

/// Working session a notification batch belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    Morning,
    #[default]
    Evening,
}

impl Session {
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Session {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "morning" => Ok(Self::Morning),
            "e" | "evening" => Ok(Self::Evening),
            other => Err(format!("unknown session: {}", other)),
        }
    }
}

/// The generated document and where it should go.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationDocument {
    /// Suggested file name, e.g. `Evening_1_January_to_5_January.txt`.
    pub file_name: String,

    /// Full UTF-8 text.
    pub body: String,

    /// Segments the body was built from.
    pub segments: Vec<NotificationSegment>,
}

/// Preamble, blank line, then segments separated by blank lines.
pub fn assemble(segments: &[NotificationSegment], config: &NotificationConfig) -> String {
    let rendered: Vec<String> = segments.iter().map(|s| s.render(config)).collect();
    format!("{}\n\n{}", config.preamble, rendered.join("\n\n"))
}

/// `<Session>_<start>_to_<end>.txt`, spaces in the dates replaced by underscores.
pub fn output_file_name(session: Session, range: &ValidityRange) -> String {
    format!(
        "{}_{}_to_{}.txt",
        session,
        range.display_start().replace(' ', "_"),
        range.display_end().replace(' ', "_")
    )
}
