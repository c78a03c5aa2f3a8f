/// One two-player match: participant slots, completion state, result
/// transcript, and the rendezvous primitive the first joiner blocks on.
///
/// The registry's global gate orders slot insertions across matches; the
/// match's own mutex guards its interior, and the rendezvous orders the
/// transcript write before the waiter's wake-up.
use parking_lot::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

use super::types::Participant;
use crate::config::game::{MATCH_ID_LEN, MATCH_SIZE};

/// A single two-player contest.
pub struct Match {
    id: String,
    game_type: String,
    state: Mutex<MatchState>,
    rendezvous: Notify,
}

/// Mutable interior of a match.
struct MatchState {
    participants: Vec<Participant>,
    /// True once the second participant is inserted. Monotonic.
    full: bool,
    /// Transcript of the duel; empty until resolution, then immutable.
    result_log: String,
    /// True once `result_log` has been published. Implies `full`.
    resolved: bool,
}

impl Match {
    /// Create an empty match of the given type with a fresh short id.
    pub fn new(game_type: &str) -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(MATCH_ID_LEN);
        Match {
            id,
            game_type: game_type.to_string(),
            state: Mutex::new(MatchState {
                participants: Vec::with_capacity(MATCH_SIZE),
                full: false,
                result_log: String::new(),
                resolved: false,
            }),
            rendezvous: Notify::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn game_type(&self) -> &str {
        &self.game_type
    }

    pub fn is_full(&self) -> bool {
        self.state.lock().full
    }

    /// Insert a participant if there is room. The second insertion sets
    /// `full` in the same critical section. Returns false when the match
    /// is already full.
    pub fn add_participant(&self, participant: Participant) -> bool {
        let mut state = self.state.lock();
        if state.full {
            return false;
        }
        state.participants.push(participant);
        if state.participants.len() == MATCH_SIZE {
            state.full = true;
        }
        true
    }

    /// Snapshot of the participant slots, in join order.
    pub fn participants(&self) -> Vec<Participant> {
        self.state.lock().participants.clone()
    }

    pub fn result_log(&self) -> String {
        self.state.lock().result_log.clone()
    }

    /// Publish the duel transcript and wake the waiting participant.
    /// Called exactly once, by the handler whose join filled the match,
    /// before it attempts any response I/O.
    pub fn publish_result(&self, transcript: String) {
        {
            let mut state = self.state.lock();
            state.result_log = transcript;
            state.resolved = true;
        }
        // notify_one stores a permit when nobody is parked yet, so a
        // result published before the opponent starts waiting is not lost.
        self.rendezvous.notify_one();
    }

    /// Block until the duel is resolved. Called by the participant whose
    /// join did not fill the match. The predicate is re-checked in a loop,
    /// so a wake-up without a published result never releases the waiter.
    pub async fn await_resolved(&self) {
        loop {
            if self.state.lock().resolved {
                return;
            }
            self.rendezvous.notified().await;
        }
    }
}
