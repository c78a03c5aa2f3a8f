use crate::config::game::MAX_NICKNAME_LEN;

/// Represents one contestant: identity plus the network endpoint the
/// connection arrived from.
#[derive(Clone, Debug)]
pub struct Participant {
    /// Display name, at most [`MAX_NICKNAME_LEN`] characters.
    pub nickname: String,
    /// Origin address of the participant's connection.
    pub address: String,
    /// Origin port of the participant's connection.
    pub port: u16,
    /// Whether this participant created the match. Assigned by the
    /// registry at join time, never taken from the request.
    pub is_host: bool,
}

impl Participant {
    /// Create a participant from a join request and its connection's peer
    /// address. Overlong nicknames are truncated, not rejected.
    pub fn new(nickname: &str, address: String, port: u16) -> Self {
        Participant {
            nickname: nickname.chars().take(MAX_NICKNAME_LEN).collect(),
            address,
            port,
            is_host: false,
        }
    }
}
