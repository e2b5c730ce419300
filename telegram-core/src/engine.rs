use std::collections::HashMap;

use crate::decode::{DecodeOutcome, decode};
use crate::encode::encode;
use crate::error::{EngineError, HandlerError, RegistryError};
use crate::header::HeaderFields;
use crate::message::{Message, MessageBody};
use crate::registry::{DecoderFn, DecoderRegistry, STANDARD_DECODERS};

/// Обработчик одного типа телеграмм — единственное место бизнес-логики.
///
/// Обработчик обязан быть чистой функцией входного сообщения и состояния,
/// внедрённого в реализующую структуру; скрытых глобалов нет. Бизнес-отказ
/// возвращается как [`HandlerError`] и не пересекает протокольную границу:
/// движок сам кодирует ответ с кодом ошибки.
pub trait TelegramHandler: Send + Sync {
    /// Обрабатывает сообщение; для типов, требующих ответа, возвращает тело ответа.
    fn handle(&self, inbound: &Message) -> Result<Option<MessageBody>, HandlerError>;
}

/// Итог обработки одной телеграммы.
#[derive(Debug)]
pub enum Outcome {
    /// Пустой кадр, пропущен.
    Skipped,
    /// Сообщение не требует ответа; путь ответа не задействовался.
    Processed {
        /// декодированное сообщение
        message: Message,
        /// отказ side-effect обработчика, если случился — вызывающий его логирует
        handler_error: Option<HandlerError>,
    },
    /// Сообщение обработано, ответ собран и закодирован.
    Replied {
        /// входное сообщение
        inbound: Message,
        /// собранный ответ
        reply: Message,
        /// телеграмма ответа
        telegram: String,
    },
}

/// Движок протокола: реестр декодеров плюс обработчики по типам.
///
/// После сборки только читается, поэтому делится между потоками без
/// блокировок; каждый вызов [`TelegramEngine::process`] независим.
pub struct TelegramEngine {
    registry: DecoderRegistry,
    handlers: HashMap<String, Box<dyn TelegramHandler>>,
}

impl TelegramEngine {
    /// Начинает сборку движка.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Прогоняет одну телеграмму через полный конвейер:
    /// декодирование -> обработчик -> заголовок ответа -> кодирование.
    ///
    /// Любая ошибка локальна для этой телеграммы; канал и следующие
    /// вызовы не затрагиваются.
    pub fn process(&self, raw: &str, fields: &HeaderFields) -> Result<Outcome, EngineError> {
        let inbound = match decode(&self.registry, raw, fields)? {
            DecodeOutcome::Skipped => return Ok(Outcome::Skipped),
            DecodeOutcome::Message(message) => message,
        };

        if !inbound.requires_reply() {
            // путь ответа не задействуется; обработчик — только ради side effect
            let handler_error = match self.handlers.get(inbound.type_id()) {
                Some(handler) => handler.handle(&inbound).err(),
                None => None,
            };
            return Ok(Outcome::Processed {
                message: inbound,
                handler_error,
            });
        }

        let handler = self
            .handlers
            .get(inbound.type_id())
            .ok_or_else(|| EngineError::NoHandler(inbound.type_id().to_string()))?;

        let (body, error_code) = match handler.handle(&inbound) {
            Ok(Some(body)) => (body, None),
            Ok(None) => return Err(EngineError::MissingReply(inbound.type_id().to_string())),
            Err(rejected) => {
                let body = inbound
                    .body
                    .reply_body()
                    .ok_or_else(|| EngineError::MissingReply(inbound.type_id().to_string()))?;
                (body, Some(rejected.code))
            }
        };

        let header = inbound.header.reply(body.payload_width());
        let mut builder = Message::builder(header, body);
        if let Some(code) = error_code {
            builder = builder.error_code(code);
        }
        let reply = builder.build();
        let telegram = encode(&reply);

        Ok(Outcome::Replied {
            inbound,
            reply,
            telegram,
        })
    }
}

/// Сборка движка — единственная точка мутации реестра и таблицы обработчиков.
///
/// Каждая регистрация возвращает `Result`: повторная регистрация типа
/// фатальна для старта процесса.
#[derive(Default)]
pub struct EngineBuilder {
    registry: DecoderRegistry,
    handlers: HashMap<String, Box<dyn TelegramHandler>>,
}

impl std::fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("registry", &self.registry)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EngineBuilder {
    /// Регистрирует декодер типа.
    pub fn decoder(
        mut self,
        type_id: impl Into<String>,
        decoder: DecoderFn,
    ) -> Result<Self, RegistryError> {
        self.registry.register(type_id, decoder)?;
        Ok(self)
    }

    /// Регистрирует все стандартные типы протокола.
    pub fn standard_types(mut self) -> Result<Self, RegistryError> {
        for (type_id, decoder) in STANDARD_DECODERS {
            self.registry.register(type_id, decoder)?;
        }
        Ok(self)
    }

    /// Регистрирует обработчик типа, требующего ответа.
    pub fn handler(
        mut self,
        type_id: impl Into<String>,
        handler: Box<dyn TelegramHandler>,
    ) -> Result<Self, RegistryError> {
        let type_id = type_id.into();
        if self.handlers.contains_key(&type_id) {
            return Err(RegistryError::DuplicateHandler(type_id));
        }
        self.handlers.insert(type_id, handler);
        Ok(self)
    }

    /// Финализирует движок; дальше реестр и обработчики только читаются.
    pub fn build(self) -> TelegramEngine {
        TelegramEngine {
            registry: self.registry,
            handlers: self.handlers,
        }
    }
}
