/// Shared registry of in-progress matches.
///
/// The registry owns create-or-join: a joining participant is either
/// inserted into the first open match of its game type or becomes the host
/// of a fresh one. A single mutex is the global gate over the collection;
/// it is held only across the short find-or-create-and-insert step, never
/// across the rendezvous wait or the dice resolution.
use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

use super::game::Match;
use super::types::Participant;

/// Result of assigning a participant to a match.
pub struct Assignment {
    /// The match the participant now occupies a slot in.
    pub game_match: Arc<Match>,
    /// True when this assignment inserted the second participant. The
    /// caller it is returned to alone performs resolution.
    pub completed_match: bool,
    /// True when this participant created the match. Only the host may
    /// later request teardown.
    pub is_host: bool,
}

/// The shared collection of all in-progress matches.
pub struct MatchRegistry {
    open_matches: Mutex<Vec<Arc<Match>>>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        MatchRegistry {
            open_matches: Mutex::new(Vec::new()),
        }
    }

    /// Atomically join the first open match of `game_type`, or create one.
    ///
    /// The first participant of a pair is flagged host; the second fills
    /// the match, which sets `full` in the same critical section.
    pub fn assign(&self, game_type: &str, mut participant: Participant) -> Assignment {
        let nickname = participant.nickname.clone();
        let mut open_matches = self.open_matches.lock();

        if let Some(existing) = open_matches
            .iter()
            .find(|m| m.game_type() == game_type && !m.is_full())
        {
            participant.is_host = false;
            existing.add_participant(participant);
            info!(
                "[Matchmaking] {} joined match {} ({})",
                nickname,
                existing.id(),
                game_type
            );
            return Assignment {
                game_match: existing.clone(),
                completed_match: true,
                is_host: false,
            };
        }

        let created = Arc::new(Match::new(game_type));
        participant.is_host = true;
        created.add_participant(participant);
        open_matches.push(created.clone());
        info!(
            "[Matchmaking] New match {} ({}) created by {}",
            created.id(),
            game_type,
            nickname
        );
        Assignment {
            game_match: created,
            completed_match: false,
            is_host: true,
        }
    }

    /// Remove the match with the given id. Returns whether anything was
    /// removed. Runs under the same gate as `assign`, so removal and
    /// assignment never interleave partially.
    pub fn remove(&self, match_id: &str) -> bool {
        let mut open_matches = self.open_matches.lock();
        let before = open_matches.len();
        open_matches.retain(|m| m.id() != match_id);
        let removed = open_matches.len() != before;
        if removed {
            info!("[Matchmaking] Match {} torn down", match_id);
        }
        removed
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
