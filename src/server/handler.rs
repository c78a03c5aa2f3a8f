/// Per-connection protocol driver.
///
/// Reads exactly one request (join or teardown), dispatches it, writes
/// exactly one response, and terminates. A client needing a second action
/// opens a new connection. Any I/O fault or protocol violation is returned
/// to the dispatcher, which logs it and drops the connection; registry
/// state is only ever touched through the guarded `assign`/`remove` calls.
use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, info};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::game::dice;
use crate::server::error::HandlerError;
use crate::server::matchmaking::registry::MatchRegistry;
use crate::server::matchmaking::types::Participant;
use crate::server::wire;

/// Request action: create or join a match.
pub const ACTION_JOIN: i32 = 1;
/// Request action: tear down a finished match.
pub const ACTION_TEARDOWN: i32 = 2;

/// Drive one connection through one request/response exchange.
pub async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    registry: Arc<MatchRegistry>,
) -> Result<(), HandlerError> {
    let action = wire::read_int(&mut stream).await?;
    match action {
        ACTION_JOIN => handle_join(&mut stream, peer, &registry).await,
        ACTION_TEARDOWN => handle_teardown(&mut stream, &registry).await,
        other => Err(HandlerError::Protocol(format!("unknown action {other}"))),
    }
}

/// Join flow: assign the participant, rendezvous with the opponent, and
/// report the result.
///
/// Whichever join fills the match resolves the duel (outside the registry
/// gate) and publishes the transcript before touching the socket again, so
/// the waiting side can never observe a full match without a forthcoming
/// result. The other side blocks on the match's rendezvous until the
/// result is published.
async fn handle_join(
    stream: &mut TcpStream,
    peer: SocketAddr,
    registry: &MatchRegistry,
) -> Result<(), HandlerError> {
    let game_type = wire::read_string(stream).await?;
    let nickname = wire::read_string(stream).await?;

    let participant = Participant::new(&nickname, peer.ip().to_string(), peer.port());
    let nickname = participant.nickname.clone();
    let assignment = registry.assign(&game_type, participant);
    let game_match = &assignment.game_match;

    if assignment.completed_match {
        let players = game_match.participants();
        // The registry inserts the host first; fall back to slot order if
        // the flags ever disagree, like the reference server does.
        let host = players
            .iter()
            .find(|p| p.is_host)
            .unwrap_or(&players[0])
            .clone();
        let guest = players
            .iter()
            .find(|p| !p.is_host)
            .unwrap_or(&players[1])
            .clone();

        let outcome = dice::resolve(
            game_match.id(),
            game_match.game_type(),
            &guest,
            &host,
            &mut rand::rng(),
        );
        info!(
            "[Matchmaking] Match {} resolved, winner: {}",
            game_match.id(),
            outcome.winner_nickname
        );
        game_match.publish_result(outcome.transcript);
    } else {
        debug!(
            "[Matchmaking] {} waiting for an opponent in match {}",
            nickname,
            game_match.id()
        );
        game_match.await_resolved().await;
    }

    let players = game_match.participants();
    let result_log = game_match.result_log();
    wire::write_participants(stream, &players).await?;
    wire::write_bool(stream, assignment.is_host).await?;
    wire::write_string(stream, game_match.id()).await?;
    wire::write_string(stream, &result_log).await?;
    stream.flush().await?;
    Ok(())
}

/// Teardown flow: remove the match by id and confirm either way. An
/// unknown id is answered with a negative confirmation, not an abort.
async fn handle_teardown(
    stream: &mut TcpStream,
    registry: &MatchRegistry,
) -> Result<(), HandlerError> {
    let match_id = wire::read_string(stream).await?;
    let confirmation = if registry.remove(&match_id) {
        format!("Partida {match_id} eliminada correctamente.")
    } else {
        "Error: No se encontró la partida o ya estaba cerrada.".to_string()
    };
    wire::write_string(stream, &confirmation).await?;
    stream.flush().await?;
    Ok(())
}
