pub mod track;

use crate::media_stream::track::{MediaKind, MediaStreamTrack, MediaStreamTrackId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// <https://www.w3.org/TR/mediacapture-streams/#stream-api>
////////////////////////////////////////////////////////////////////////////////////////////////////
pub type MediaStreamId = String;

/// Handle to a local or remote media stream.
///
/// Connections store and hand out streams but never look inside them; the
/// media itself is owned by whatever platform layer the negotiator drives.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStream {
    stream_id: MediaStreamId,
    tracks: HashMap<MediaStreamTrackId, MediaStreamTrack>,
    active: bool,
}

impl MediaStream {
    pub fn new(stream_id: MediaStreamId, tracks: Vec<MediaStreamTrack>) -> Self {
        Self {
            stream_id,
            tracks: tracks
                .into_iter()
                .map(|track| (track.track_id().to_string(), track))
                .collect(),
            active: true,
        }
    }

    pub fn stream_id(&self) -> &MediaStreamId {
        &self.stream_id
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn get_audio_tracks(&self) -> impl Iterator<Item = &MediaStreamTrack> {
        self.tracks
            .values()
            .filter(|track| track.kind() == MediaKind::Audio)
    }

    pub fn get_video_tracks(&self) -> impl Iterator<Item = &MediaStreamTrack> {
        self.tracks
            .values()
            .filter(|track| track.kind() == MediaKind::Video)
    }

    pub fn get_tracks(&self) -> impl Iterator<Item = &MediaStreamTrack> {
        self.tracks.values()
    }

    pub fn get_track_by_id(&self, track_id: &MediaStreamTrackId) -> Option<&MediaStreamTrack> {
        self.tracks.get(track_id)
    }

    pub fn add_track(&mut self, track: MediaStreamTrack) {
        self.tracks.insert(track.track_id().to_string(), track);
    }

    pub fn remove_track(&mut self, track_id: &MediaStreamTrackId) -> Option<MediaStreamTrack> {
        self.tracks.remove(track_id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_media_stream_tracks_by_kind() {
        let mut stream = MediaStream::new(
            "stream".to_owned(),
            vec![
                MediaStreamTrack::new("mic".to_owned(), MediaKind::Audio, "mic".to_owned()),
                MediaStreamTrack::new("cam".to_owned(), MediaKind::Video, "cam".to_owned()),
            ],
        );

        assert!(stream.active());
        assert_eq!(stream.get_tracks().count(), 2);
        assert_eq!(stream.get_audio_tracks().count(), 1);
        assert_eq!(stream.get_video_tracks().count(), 1);
        assert_eq!(
            stream
                .get_track_by_id(&"cam".to_owned())
                .map(|track| track.kind()),
            Some(MediaKind::Video)
        );

        let removed = stream.remove_track(&"mic".to_owned());
        assert_eq!(removed.map(|track| track.kind()), Some(MediaKind::Audio));
        assert_eq!(stream.get_audio_tracks().count(), 0);

        stream.add_track(MediaStreamTrack::new(
            "screen".to_owned(),
            MediaKind::Video,
            "screen".to_owned(),
        ));
        assert_eq!(stream.get_video_tracks().count(), 2);
    }

    #[test]
    fn test_media_kind_from_str() {
        let tests = vec![
            ("audio", MediaKind::Audio),
            ("video", MediaKind::Video),
            ("data", MediaKind::Unspecified),
        ];

        for (raw, expected) in tests {
            assert_eq!(MediaKind::from(raw), expected);
        }
    }
}
