use chrono::{NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ERROR_CODE_WIDTH, TIMESTAMP_WIDTH, TYPE_ID_WIDTH};
use crate::header::Header;

/// Ширина идентификатора транспортной единицы.
pub const UNIT_WIDTH: usize = 8;

/// Ширина кода локации.
pub const LOCATION_WIDTH: usize = 5;

/// 4-символьные идентификаторы типов телеграмм; единственный ключ диспетчеризации.
pub mod type_ids {
    /// запрос перемещения транспортной единицы
    pub const MOVEMENT_REQUEST: &str = "REQ_";
    /// ответ на запрос перемещения
    pub const MOVEMENT_RESPONSE: &str = "RES_";
    /// запрос синхронизации времени
    pub const TIMESYNC_REQUEST: &str = "SYNQ";
    /// ответ синхронизации времени
    pub const TIMESYNC_RESPONSE: &str = "SYNC";
    /// уведомление об отказе подсистемы
    pub const FAULT_REPORT: &str = "ERR_";
}

/// Тело телеграммы — закрытый набор типов протокола.
///
/// Диспетчеризация идёт по явному тегу типа, наследования нет.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBody {
    /// `REQ_` — запрос перемещения транспортной единицы
    MovementRequest {
        /// идентификатор транспортной единицы
        unit: String,
        /// фактическая локация
        actual: String,
        /// целевая локация
        target: String,
    },
    /// `RES_` — ответ на запрос перемещения
    MovementResponse {
        /// идентификатор транспортной единицы
        unit: String,
        /// фактическая локация
        actual: String,
        /// целевая локация
        target: String,
    },
    /// `SYNQ` — запрос синхронизации времени; образец часов несёт `created`
    TimesyncRequest,
    /// `SYNC` — ответ синхронизации времени
    TimesyncResponse,
    /// `ERR_` — уведомление об отказе; код несёт `error_code`
    FaultReport,
}

impl MessageBody {
    /// 4-символьный идентификатор типа.
    pub fn type_id(&self) -> &'static str {
        match self {
            MessageBody::MovementRequest { .. } => type_ids::MOVEMENT_REQUEST,
            MessageBody::MovementResponse { .. } => type_ids::MOVEMENT_RESPONSE,
            MessageBody::TimesyncRequest => type_ids::TIMESYNC_REQUEST,
            MessageBody::TimesyncResponse => type_ids::TIMESYNC_RESPONSE,
            MessageBody::FaultReport => type_ids::FAULT_REPORT,
        }
    }

    /// Требует ли телеграмма этого типа ответа.
    pub fn requires_reply(&self) -> bool {
        matches!(
            self,
            MessageBody::MovementRequest { .. } | MessageBody::TimesyncRequest
        )
    }

    /// Суммарная ширина бизнес-полей тела.
    pub fn body_width(&self) -> usize {
        match self {
            MessageBody::MovementRequest { .. } | MessageBody::MovementResponse { .. } => {
                UNIT_WIDTH + 2 * LOCATION_WIDTH
            }
            MessageBody::TimesyncRequest
            | MessageBody::TimesyncResponse
            | MessageBody::FaultReport => 0,
        }
    }

    /// Полная ширина payload-части: тип + тело + код ошибки + метка времени.
    pub fn payload_width(&self) -> usize {
        TYPE_ID_WIDTH + self.body_width() + ERROR_CODE_WIDTH + TIMESTAMP_WIDTH
    }

    /// Тело ответа, зеркалящее бизнес-поля запроса.
    ///
    /// Обработчики строят на нём подтверждения; движок — ответы-отказы
    /// с кодом ошибки. Для типов, не требующих ответа, тела ответа нет.
    pub fn reply_body(&self) -> Option<MessageBody> {
        match self {
            MessageBody::MovementRequest {
                unit,
                actual,
                target,
            } => Some(MessageBody::MovementResponse {
                unit: unit.clone(),
                actual: actual.clone(),
                target: target.clone(),
            }),
            MessageBody::TimesyncRequest => Some(MessageBody::TimesyncResponse),
            _ => None,
        }
    }
}

/// Сообщение протокола: заголовок, общие поля и типизированное тело.
///
/// Строится заново на каждую телеграмму и не переиспользуется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// заголовок телеграммы
    pub header: Header,
    /// код ошибки (8 символов на проводе), если есть
    pub error_code: Option<String>,
    /// момент создания сообщения
    pub created: NaiveDateTime,
    /// типизированное тело
    pub body: MessageBody,
}

impl Message {
    /// Начинает сборку сообщения; заголовок и тело обязательны.
    pub fn builder(header: Header, body: MessageBody) -> MessageBuilder {
        MessageBuilder {
            header,
            body,
            error_code: None,
            created: None,
        }
    }

    /// Идентификатор типа тела.
    pub fn type_id(&self) -> &'static str {
        self.body.type_id()
    }

    /// Требует ли сообщение ответа.
    pub fn requires_reply(&self) -> bool {
        self.body.requires_reply()
    }
}

/// Пошаговая сборка [`Message`].
///
/// Принимает произвольное подмножество необязательных полей и финализируется
/// в неизменяемое сообщение.
#[derive(Debug)]
pub struct MessageBuilder {
    header: Header,
    body: MessageBody,
    error_code: Option<String>,
    created: Option<NaiveDateTime>,
}

impl MessageBuilder {
    /// Код ошибки протокола.
    pub fn error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Явная метка времени создания; без неё берётся текущее время.
    pub fn created(mut self, ts: NaiveDateTime) -> Self {
        self.created = Some(ts);
        self
    }

    /// Финализирует неизменяемое сообщение.
    pub fn build(self) -> Message {
        Message {
            header: self.header,
            body: self.body,
            error_code: self.error_code,
            created: self.created.unwrap_or_else(now_wire_precision),
        }
    }
}

// провод несёт секунды, поэтому и умолчание держим в секундах
fn now_wire_precision() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}
