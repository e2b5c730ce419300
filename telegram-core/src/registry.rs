use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::decode;
use crate::error::{DecodeError, RegistryError};
use crate::header::HeaderFields;
use crate::message::{Message, type_ids};

/// Декодер одного типа телеграмм: сырой текст + поля заголовка -> сообщение.
pub type DecoderFn = fn(&str, &HeaderFields) -> Result<Message, DecodeError>;

/// Стандартные типы протокола и их декодеры — таблица регистрации на старте.
pub const STANDARD_DECODERS: [(&str, DecoderFn); 5] = [
    (type_ids::MOVEMENT_REQUEST, decode::movement_request),
    (type_ids::MOVEMENT_RESPONSE, decode::movement_response),
    (type_ids::TIMESYNC_REQUEST, decode::timesync_request),
    (type_ids::TIMESYNC_RESPONSE, decode::timesync_response),
    (type_ids::FAULT_REPORT, decode::fault_report),
];

/// Реестр декодеров по идентификатору типа.
///
/// Заполняется один раз при старте процесса и дальше только читается,
/// поэтому конкурентный доступ не требует блокировок.
#[derive(Debug, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<String, DecoderFn>,
}

impl DecoderRegistry {
    /// Пустой реестр.
    pub fn new() -> Self {
        Self::default()
    }

    /// Реестр со всеми стандартными типами протокола.
    pub fn with_standard_types() -> Self {
        let mut registry = Self::new();
        for (type_id, decoder) in STANDARD_DECODERS {
            registry
                .register(type_id, decoder)
                .expect("standard type ids are unique");
        }
        registry
    }

    /// Регистрирует декодер типа `type_id`.
    ///
    /// Повторная регистрация того же типа — фатальная ошибка старта:
    /// процесс не должен подняться с двумя декодерами на один тип.
    pub fn register(
        &mut self,
        type_id: impl Into<String>,
        decoder: DecoderFn,
    ) -> Result<(), RegistryError> {
        match self.decoders.entry(type_id.into()) {
            Entry::Vacant(e) => {
                e.insert(decoder);
                Ok(())
            }
            Entry::Occupied(e) => Err(RegistryError::DuplicateDecoder(e.key().clone())),
        }
    }

    /// Ищет декодер по идентификатору типа; чистое чтение.
    pub fn lookup(&self, type_id: &str) -> Option<DecoderFn> {
        self.decoders.get(type_id).copied()
    }

    /// Число зарегистрированных типов.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Пуст ли реестр.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
