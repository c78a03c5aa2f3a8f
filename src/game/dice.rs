/// Dice duel resolution.
///
/// Pure function over two participants and an RNG: both sides roll a die
/// per round until the rolls differ, and the strictly higher final roll
/// wins. The transcript framing (header, per-roll lines, winner line)
/// follows the original wire-visible text and is an opaque blob to every
/// other component.
use rand::Rng;

use crate::config::game::DIE_SIDES;
use crate::server::matchmaking::types::Participant;

/// Outcome of one resolved duel.
pub struct DuelOutcome {
    /// Nickname of the winning participant.
    pub winner_nickname: String,
    /// Full textual record of the rounds and the result.
    pub transcript: String,
}

/// Resolve a duel. `first` is the guest (non-host) and rolls before
/// `second`, the host — turn order by convention, not fairness.
///
/// Tied rounds are re-rolled without an upper cap; termination is almost
/// sure for a six-sided die, so no retry limit is imposed by design. The
/// RNG is a parameter so tests can seed it.
pub fn resolve(
    match_id: &str,
    game_type: &str,
    first: &Participant,
    second: &Participant,
    rng: &mut impl Rng,
) -> DuelOutcome {
    let mut transcript = String::new();
    transcript.push_str(&format!("\n--- INICIO DE PARTIDA (ID: {match_id}) ---\n"));
    transcript.push_str(&format!("Juego: {game_type}\n"));
    transcript.push_str(&format!(
        "Jugadores: {} vs {}\n",
        first.nickname, second.nickname
    ));

    let mut round = 1u32;
    let (guest_roll, host_roll) = loop {
        if round > 1 {
            transcript.push_str(&format!(
                "¡Empate! Se repite la tirada (Ronda {round})...\n"
            ));
        }

        let guest_roll = rng.random_range(1..=DIE_SIDES);
        transcript.push_str(&format!(
            " > {} (No-Host) tira... [{}]\n",
            first.nickname, guest_roll
        ));

        let host_roll = rng.random_range(1..=DIE_SIDES);
        transcript.push_str(&format!(
            " > {} (Host)    tira... [{}]\n",
            second.nickname, host_roll
        ));

        if guest_roll != host_roll {
            break (guest_roll, host_roll);
        }
        round += 1;
    };

    let winner = if guest_roll > host_roll { first } else { second };
    transcript.push_str("----------------------------------\n");
    transcript.push_str(&format!("¡GANADOR: {}!\n", winner.nickname));
    transcript.push_str("----------------------------------\n");

    DuelOutcome {
        winner_nickname: winner.nickname.clone(),
        transcript,
    }
}
