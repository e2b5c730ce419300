use chrono::NaiveDateTime;

use crate::constants::{
    BODY_OFFSET, ERROR_CODE_WIDTH, FILLER, HEADER_WIDTH, TIMESTAMP_WIDTH, TRAILER_WIDTH,
    TYPE_ID_WIDTH,
};
use crate::error::{DecodeError, FieldError};
use crate::fields::{parse_timestamp, take};
use crate::header::{Header, HeaderFields};
use crate::message::{LOCATION_WIDTH, Message, MessageBody, UNIT_WIDTH};
use crate::registry::DecoderRegistry;

/// Результат конвейера декодирования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Пустой кадр (keepalive) — штатный пропуск, не ошибка.
    Skipped,
    /// Успешно декодированное сообщение.
    Message(Message),
}

/// Декодирует одну телеграмму.
///
/// Пустой текст даёт [`DecodeOutcome::Skipped`]. Иначе по фиксированному
/// смещению сразу за заголовочной частью вырезается 4-символьный
/// идентификатор типа и ищется в реестре; незарегистрированный тип — это
/// [`DecodeError::UnknownMessageType`] независимо от содержимого тела.
/// Вызов не держит состояния между телеграммами.
pub fn decode(
    registry: &DecoderRegistry,
    raw: &str,
    fields: &HeaderFields,
) -> Result<DecodeOutcome, DecodeError> {
    if raw.is_empty() {
        return Ok(DecodeOutcome::Skipped);
    }

    let type_id = take(raw, "type id", HEADER_WIDTH, TYPE_ID_WIDTH)?;
    let decoder = registry
        .lookup(type_id)
        .ok_or_else(|| DecodeError::UnknownMessageType(type_id.to_string()))?;

    decoder(raw, fields).map(DecodeOutcome::Message)
}

/// Декодер `REQ_` — запрос перемещения.
pub fn movement_request(raw: &str, fields: &HeaderFields) -> Result<Message, DecodeError> {
    let (unit, actual, target) = movement_body(raw)?;
    finish(
        raw,
        fields,
        BODY_OFFSET + UNIT_WIDTH + 2 * LOCATION_WIDTH,
        MessageBody::MovementRequest {
            unit,
            actual,
            target,
        },
    )
}

/// Декодер `RES_` — ответ на запрос перемещения.
pub fn movement_response(raw: &str, fields: &HeaderFields) -> Result<Message, DecodeError> {
    let (unit, actual, target) = movement_body(raw)?;
    finish(
        raw,
        fields,
        BODY_OFFSET + UNIT_WIDTH + 2 * LOCATION_WIDTH,
        MessageBody::MovementResponse {
            unit,
            actual,
            target,
        },
    )
}

/// Декодер `SYNQ` — запрос синхронизации времени.
pub fn timesync_request(raw: &str, fields: &HeaderFields) -> Result<Message, DecodeError> {
    finish(raw, fields, BODY_OFFSET, MessageBody::TimesyncRequest)
}

/// Декодер `SYNC` — ответ синхронизации времени.
pub fn timesync_response(raw: &str, fields: &HeaderFields) -> Result<Message, DecodeError> {
    finish(raw, fields, BODY_OFFSET, MessageBody::TimesyncResponse)
}

/// Декодер `ERR_` — уведомление об отказе.
pub fn fault_report(raw: &str, fields: &HeaderFields) -> Result<Message, DecodeError> {
    finish(raw, fields, BODY_OFFSET, MessageBody::FaultReport)
}

fn movement_body(raw: &str) -> Result<(String, String, String), DecodeError> {
    let unit = body_field(raw, "unit", BODY_OFFSET, UNIT_WIDTH)?;
    let actual = body_field(raw, "actual location", BODY_OFFSET + UNIT_WIDTH, LOCATION_WIDTH)?;
    let target = body_field(
        raw,
        "target location",
        BODY_OFFSET + UNIT_WIDTH + LOCATION_WIDTH,
        LOCATION_WIDTH,
    )?;
    Ok((unit, actual, target))
}

fn body_field(
    raw: &str,
    name: &'static str,
    offset: usize,
    width: usize,
) -> Result<String, DecodeError> {
    Ok(take(raw, name, offset, width)?.trim_end().to_string())
}

fn finish(
    raw: &str,
    fields: &HeaderFields,
    body_end: usize,
    body: MessageBody,
) -> Result<Message, DecodeError> {
    let header = Header::from_fields(fields)?;
    let (error_code, created) = trailer(raw, body_end)?;

    let mut builder = Message::builder(header, body);
    if let Some(code) = error_code {
        builder = builder.error_code(code);
    }
    if let Some(ts) = created {
        builder = builder.created(ts);
    }
    Ok(builder.build())
}

// Хвост телеграммы за телом: блок "код ошибки + метка времени" присутствует
// целиком либо отсутствует; частичный остаток — ошибка формата.
fn trailer(
    raw: &str,
    body_end: usize,
) -> Result<(Option<String>, Option<NaiveDateTime>), DecodeError> {
    let trimmed = raw.trim_end_matches([FILLER, ' ']);
    let rest = trimmed.len().saturating_sub(body_end);

    if rest == 0 {
        return Ok((None, None));
    }
    if rest != TRAILER_WIDTH {
        return Err(FieldError::BadTrailer {
            need: TRAILER_WIDTH,
            got: rest,
        }
        .into());
    }

    let code = take(raw, "error code", body_end, ERROR_CODE_WIDTH)?.trim();
    let error_code = (!code.is_empty()).then(|| code.to_string());

    let created = parse_timestamp(take(
        raw,
        "created",
        body_end + ERROR_CODE_WIDTH,
        TIMESTAMP_WIDTH,
    )?)?;

    Ok((error_code, Some(created)))
}
