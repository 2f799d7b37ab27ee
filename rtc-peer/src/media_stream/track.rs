use serde::{Deserialize, Serialize};
use std::fmt;

pub type MediaStreamTrackId = String;

/// Kind of media carried by a track.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "video")]
    Video,
}

impl From<&str> for MediaKind {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => MediaKind::Audio,
            "video" => MediaKind::Video,
            _ => MediaKind::Unspecified,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Unspecified => "unspecified",
        };
        write!(f, "{s}")
    }
}

/// A single audio or video track inside a [`MediaStream`](super::MediaStream).
///
/// The connection layer never inspects media; a track only carries the
/// identity the application and the negotiator agree on.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStreamTrack {
    track_id: MediaStreamTrackId,
    kind: MediaKind,
    label: String,
    enabled: bool,
}

impl MediaStreamTrack {
    pub fn new(track_id: MediaStreamTrackId, kind: MediaKind, label: String) -> Self {
        Self {
            track_id,
            kind,
            label,
            enabled: true,
        }
    }

    pub fn track_id(&self) -> &MediaStreamTrackId {
        &self.track_id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
