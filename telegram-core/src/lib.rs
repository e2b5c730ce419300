//! # telegram-core
//!
//! Протокольное ядро обмена телеграммами с внешними подсистемами склада
//! (PLC-контроллеры, ERP): текстовые кадры фиксированного формата поверх
//! байтового потока.
//!
//! Этот крейт содержит:
//!
//! - [`header`] — заголовок телеграммы и вывод заголовка ответа
//! - [`fields`] — кодек полей фиксированной ширины (добивка, метки времени)
//! - [`message`] — модель сообщений и конкретные типы телеграмм
//! - [`registry`] — реестр декодеров, заполняемый один раз на старте
//! - [`decode`] — конвейер декодирования
//! - [`encode`] — кодирование сообщений обратно в текст телеграмм
//! - [`engine`] — обработчики и полный цикл запрос-ответ
//! - [`error`] — типы ошибок, которые возвращают компоненты `telegram-core`
//!
//! Транспорт (разбиение потока на кадры, чтение строк) остаётся снаружи:
//! ядро принимает сырой текст телеграммы плюс уже разобранные транспортом
//! поля заголовка и отдаёт текст ответа.
//!
//! ## Быстрый пример: декодирование запроса перемещения
//!
//! ```rust
//! use telegram_core::decode::{DecodeOutcome, decode};
//! use telegram_core::header::Header;
//! use telegram_core::message::MessageBody;
//! use telegram_core::registry::DecoderRegistry;
//!
//! let header = Header {
//!     sync: "###".to_string(),
//!     total_length: 50,
//!     sender: "WMS".to_string(),
//!     receiver: "PLC1".to_string(),
//!     sequence: 5,
//! };
//! let raw = format!("{}REQ_0000001 AREA1AREA2*****", header.render());
//!
//! let registry = DecoderRegistry::with_standard_types();
//! let decoded = decode(&registry, &raw, &header.to_fields()).unwrap();
//!
//! match decoded {
//!     DecodeOutcome::Message(msg) => assert_eq!(
//!         msg.body,
//!         MessageBody::MovementRequest {
//!             unit: "0000001".to_string(),
//!             actual: "AREA1".to_string(),
//!             target: "AREA2".to_string(),
//!         }
//!     ),
//!     DecodeOutcome::Skipped => unreachable!("кадр не пустой"),
//! }
//! ```
//!
//! ## Пример: полный цикл запрос-ответ
//!
//! ```rust
//! use telegram_core::engine::{Outcome, TelegramEngine, TelegramHandler};
//! use telegram_core::error::HandlerError;
//! use telegram_core::message::{Message, MessageBody, type_ids};
//!
//! struct AckMovement;
//!
//! impl TelegramHandler for AckMovement {
//!     fn handle(&self, inbound: &Message) -> Result<Option<MessageBody>, HandlerError> {
//!         Ok(inbound.body.reply_body())
//!     }
//! }
//!
//! let engine = TelegramEngine::builder()
//!     .standard_types().unwrap()
//!     .handler(type_ids::MOVEMENT_REQUEST, Box::new(AckMovement)).unwrap()
//!     .build();
//!
//! # let header = telegram_core::header::Header {
//! #     sync: "###".to_string(),
//! #     total_length: 50,
//! #     sender: "WMS".to_string(),
//! #     receiver: "PLC1".to_string(),
//! #     sequence: 5,
//! # };
//! # let raw = format!("{}REQ_0000001 AREA1AREA2*****", header.render());
//! match engine.process(&raw, &header.to_fields()).unwrap() {
//!     Outcome::Replied { reply, telegram, .. } => {
//!         assert_eq!(reply.header.sender, "PLC1");
//!         assert_eq!(reply.header.receiver, "WMS");
//!         assert_eq!(reply.header.sequence, 6);
//!         assert_eq!(telegram.len(), reply.header.total_length);
//!     }
//!     _ => unreachable!("REQ_ требует ответа"),
//! }
//! ```
//!
//! ## Дизайн
//!
//! Ядро задумано как чистая зависимость без runtime: никакого async,
//! сокетов и глобального состояния. Реестр декодеров и таблица
//! обработчиков собираются один раз при старте и дальше только читаются,
//! поэтому движок делится между соединениями без блокировок.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Конвейер декодирования и декодеры стандартных типов.
pub mod decode;

/// Кодирование сообщений в текст телеграмм.
pub mod encode;

/// Движок: обработчики и полный цикл запрос-ответ.
pub mod engine;

/// Ошибки `telegram-core`.
pub mod error;

/// Кодек полей фиксированной ширины.
pub mod fields;

/// Заголовок телеграммы и вывод заголовка ответа.
pub mod header;

/// Модель сообщений и конкретные типы телеграмм.
pub mod message;

/// Реестр декодеров по идентификатору типа.
pub mod registry;

/// Общие константы провода.
pub mod constants;

// --- Re-exports (публичный фасад API) ---

pub use crate::decode::{DecodeOutcome, decode};
pub use crate::encode::encode;
pub use crate::engine::{EngineBuilder, Outcome, TelegramEngine, TelegramHandler};
pub use crate::error::{DecodeError, EngineError, FieldError, HandlerError, RegistryError};
pub use crate::header::{Header, HeaderFields};
pub use crate::message::{Message, MessageBody, MessageBuilder};
pub use crate::registry::{DecoderFn, DecoderRegistry};
