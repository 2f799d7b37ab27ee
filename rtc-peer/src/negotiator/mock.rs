use super::*;
use shared::error::Error;

/// Negotiator that records every call it receives.
#[derive(Default, Debug)]
pub(crate) struct RecordingNegotiator {
    pub(crate) starts: Vec<(ConnectionInfo, NegotiationOptions)>,
    pub(crate) descriptions: Vec<RTCSessionDescription>,
    pub(crate) candidates: Vec<RTCIceCandidateInit>,
    pub(crate) cleanups: Vec<ConnectionInfo>,
    pub(crate) fail_start: bool,
}

impl RecordingNegotiator {
    pub(crate) fn failing() -> Self {
        Self {
            fail_start: true,
            ..Default::default()
        }
    }
}

impl Negotiator for RecordingNegotiator {
    fn start_connection(
        &mut self,
        connection: &ConnectionInfo,
        options: &NegotiationOptions,
    ) -> Result<()> {
        if self.fail_start {
            return Err(Error::ErrNegotiationFailed("no peer connection".to_owned()));
        }
        self.starts.push((connection.clone(), options.clone()));
        Ok(())
    }

    fn handle_sdp(
        &mut self,
        _connection: &ConnectionInfo,
        description: &RTCSessionDescription,
    ) -> Result<()> {
        self.descriptions.push(description.clone());
        Ok(())
    }

    fn handle_candidate(
        &mut self,
        _connection: &ConnectionInfo,
        candidate: &RTCIceCandidateInit,
    ) -> Result<()> {
        self.candidates.push(candidate.clone());
        Ok(())
    }

    fn cleanup(&mut self, connection: &ConnectionInfo) {
        self.cleanups.push(connection.clone());
    }
}
