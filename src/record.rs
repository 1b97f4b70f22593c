use serde::Deserialize;

/// One user's Yaps snapshot. Built once per fetch and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    username: String,
    yaps_all: f64,
    yaps_l7d: f64,
}

/// Shape of the endpoint's JSON body. Every key is optional; nulls count as missing.
#[derive(Debug, Deserialize)]
pub(crate) struct YapsPayload {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    yaps_all: Option<f64>,
    #[serde(default)]
    yaps_l7d: Option<f64>,
}

impl ScoreRecord {
    pub fn new(username: impl Into<String>, yaps_all: f64, yaps_l7d: f64) -> ScoreRecord {
        ScoreRecord {
            username: username.into(),
            yaps_all,
            yaps_l7d,
        }
    }

    /// Falls back to the requested username when the payload does not echo one.
    pub(crate) fn from_payload(requested: &str, payload: YapsPayload) -> ScoreRecord {
        let username = payload
            .username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| requested.to_string());

        ScoreRecord::new(
            username,
            payload.yaps_all.unwrap_or(0.0),
            payload.yaps_l7d.unwrap_or(0.0),
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn yaps_all(&self) -> f64 {
        self.yaps_all
    }

    pub fn yaps_l7d(&self) -> f64 {
        self.yaps_l7d
    }
}
