//! Fixed utterances and prompt templates per skill locale

use std::fmt;

use serde::Deserialize;

/// Language the skill speaks and prompts in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    /// German (the skill's home market)
    #[default]
    #[serde(rename = "de-DE")]
    German,
    /// English
    #[serde(rename = "en-US")]
    English,
}

impl Locale {
    /// BCP 47 tag as used in configuration
    pub const fn tag(self) -> &'static str {
        match self {
            Self::German => "de-DE",
            Self::English => "en-US",
        }
    }

    /// Spoken when the completion API key is missing
    pub const fn not_configured(self) -> &'static str {
        match self {
            Self::German => "Der Skill ist aktuell nicht richtig konfiguriert.",
            Self::English => "The skill is not correctly configured right now.",
        }
    }

    /// Spoken when the completion call fails for any reason
    pub const fn answer_unavailable(self) -> &'static str {
        match self {
            Self::German => "Tut mir leid, ich konnte die Antwort gerade nicht erhalten.",
            Self::English => "Sorry, I could not retrieve the answer right now.",
        }
    }

    /// Spoken when the device address cannot be read
    pub const fn permission_request(self) -> &'static str {
        match self {
            Self::German => {
                "Bitte erlaube in den Einstellungen der Alexa App den Zugriff auf deine Postleitzahl, \
                 damit ich dir Auskunft geben kann."
            }
            Self::English => {
                "Please allow access to your postal code in the settings of the Alexa app, \
                 so that I can give you an answer."
            }
        }
    }

    /// Prompt asking whether shorts can be worn today at `postal_code`
    pub fn shorts_prompt(self, postal_code: &str) -> String {
        match self {
            Self::German => format!(
                "Ich bin ein Alexa-Skill. Kann man heute in der Postleitzahl {postal_code} eine kurze Hose tragen? \
                 Antworte nach folgendem Schema: 'Ja/Nein, in [Ort] kann man heute (k)eine kurze Hose tragen. \
                 [Lass baumeln/Versteck die Waden.]'"
            ),
            Self::English => format!(
                "I am an Alexa skill. Can you wear shorts today in the postal code {postal_code}? \
                 Answer using this pattern: 'Yes/No, in [place] you can(not) wear shorts today. \
                 [Let them hang/Cover your calves.]'"
            ),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
