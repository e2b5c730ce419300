use std::collections::HashSet;

use telegram_core::engine::TelegramHandler;
use telegram_core::error::HandlerError;
use telegram_core::message::{Message, MessageBody};

/// Код ошибки "целевая локация неизвестна".
pub(crate) const UNKNOWN_TARGET: &str = "0404";

/// Подтверждает перемещение, зеркаля поля запроса.
///
/// Если внедрён список известных целевых локаций, запрос в неизвестную
/// локацию отклоняется кодом [`UNKNOWN_TARGET`]; движок сам соберёт
/// ответ-отказ. Состояние только читается — обработчик остаётся чистой
/// функцией входа и внедрённого состояния.
pub(crate) struct MovementAck {
    pub(crate) known_targets: Option<HashSet<String>>,
}

impl TelegramHandler for MovementAck {
    fn handle(&self, inbound: &Message) -> Result<Option<MessageBody>, HandlerError> {
        if let (Some(known), MessageBody::MovementRequest { target, .. }) =
            (&self.known_targets, &inbound.body)
        {
            if !known.contains(target) {
                return Err(HandlerError::new(UNKNOWN_TARGET));
            }
        }

        Ok(inbound.body.reply_body())
    }
}

/// Отвечает на запрос синхронизации времени.
pub(crate) struct TimesyncAck;

impl TelegramHandler for TimesyncAck {
    fn handle(&self, inbound: &Message) -> Result<Option<MessageBody>, HandlerError> {
        Ok(inbound.body.reply_body())
    }
}
