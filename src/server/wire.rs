/// Typed-field wire codec.
///
/// Requests and responses are framed as an ordered sequence of typed
/// fields with no schema negotiation: big-endian `i32` integers, one-byte
/// booleans, and UTF-8 strings prefixed by a big-endian `u16` byte length.
/// Participant records are serialized as a structured record (nickname,
/// address, port, host flag), in that order.
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::server::error::HandlerError;
use crate::server::matchmaking::types::Participant;

pub async fn read_int<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i32, HandlerError> {
    Ok(reader.read_i32().await?)
}

pub async fn write_int<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: i32,
) -> Result<(), HandlerError> {
    writer.write_i32(value).await?;
    Ok(())
}

pub async fn read_bool<R: AsyncRead + Unpin>(reader: &mut R) -> Result<bool, HandlerError> {
    Ok(reader.read_u8().await? != 0)
}

pub async fn write_bool<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: bool,
) -> Result<(), HandlerError> {
    writer.write_u8(u8::from(value)).await?;
    Ok(())
}

pub async fn read_string<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String, HandlerError> {
    let len = reader.read_u16().await? as usize;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    String::from_utf8(buf)
        .map_err(|_| HandlerError::Protocol("string field is not valid UTF-8".to_string()))
}

pub async fn write_string<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: &str,
) -> Result<(), HandlerError> {
    let bytes = value.as_bytes();
    let len = u16::try_from(bytes.len()).map_err(|_| {
        HandlerError::Protocol(format!(
            "string field of {} bytes exceeds the wire limit",
            bytes.len()
        ))
    })?;
    writer.write_u16(len).await?;
    writer.write_all(bytes).await?;
    Ok(())
}

pub async fn read_participant<R: AsyncRead + Unpin>(
    reader: &mut R,
) -> Result<Participant, HandlerError> {
    let nickname = read_string(reader).await?;
    let address = read_string(reader).await?;
    let port = read_int(reader).await?;
    let is_host = read_bool(reader).await?;
    Ok(Participant {
        nickname,
        address,
        port: u16::try_from(port)
            .map_err(|_| HandlerError::Protocol(format!("port {port} is out of range")))?,
        is_host,
    })
}

pub async fn write_participant<W: AsyncWrite + Unpin>(
    writer: &mut W,
    participant: &Participant,
) -> Result<(), HandlerError> {
    write_string(writer, &participant.nickname).await?;
    write_string(writer, &participant.address).await?;
    write_int(writer, i32::from(participant.port)).await?;
    write_bool(writer, participant.is_host).await?;
    Ok(())
}

/// Read an ordered participant list: an `i32` count, then that many records.
pub async fn read_participants<R: AsyncRead + Unpin>(
    reader: &mut R,
) -> Result<Vec<Participant>, HandlerError> {
    let count = read_int(reader).await?;
    let count = usize::try_from(count)
        .map_err(|_| HandlerError::Protocol(format!("negative participant count {count}")))?;
    let mut participants = Vec::with_capacity(count);
    for _ in 0..count {
        participants.push(read_participant(reader).await?);
    }
    Ok(participants)
}

/// Write an ordered participant list: an `i32` count, then the records.
pub async fn write_participants<W: AsyncWrite + Unpin>(
    writer: &mut W,
    participants: &[Participant],
) -> Result<(), HandlerError> {
    write_int(writer, participants.len() as i32).await?;
    for participant in participants {
        write_participant(writer, participant).await?;
    }
    Ok(())
}
