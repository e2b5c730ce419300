use thiserror::Error;

/// Ошибки нарезки и разбора полей фиксированной ширины
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Телеграмма короче, чем требует поле (или срез попал внутрь не-ASCII символа)
    #[error("field `{field}` needs {need} chars at offset {offset}, telegram has {got}")]
    Truncated {
        /// имя поля
        field: &'static str,
        /// смещение поля от начала телеграммы
        offset: usize,
        /// требуемая ширина
        need: usize,
        /// фактическая длина телеграммы
        got: usize,
    },

    /// Метка времени не соответствует yyyyMMddHHmmss
    #[error("bad timestamp {value:?}: expected yyyyMMddHHmmss")]
    BadTimestamp {
        /// исходный текст поля
        value: String,
    },

    /// Обязательное поле заголовка отсутствует в карте транспорта
    #[error("missing header field: {0}")]
    MissingHeaderField(&'static str),

    /// Числовое поле заголовка не разбирается как число
    #[error("header field {field} is not a number: {value:?}")]
    BadHeaderNumber {
        /// имя поля
        field: &'static str,
        /// исходный текст поля
        value: String,
    },

    /// Хвост телеграммы не пуст и не равен полному блоку "код ошибки + метка времени"
    #[error("trailer must be empty or {need} chars, got {got}")]
    BadTrailer {
        /// полная ширина хвостового блока
        need: usize,
        /// фактический остаток после тела
        got: usize,
    },
}

/// Ошибки конвейера декодирования
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Идентификатор типа не зарегистрирован в реестре
    #[error("unknown message type: {0:?}")]
    UnknownMessageType(String),

    /// Поля телеграммы не разбираются по своим ширинам
    #[error("malformed telegram: {0}")]
    Malformed(#[from] FieldError),
}

/// Ошибки сборки реестра и движка; фатальны для старта процесса
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Два декодера претендуют на один тип
    #[error("decoder already registered for type {0:?}")]
    DuplicateDecoder(String),

    /// Два обработчика претендуют на один тип
    #[error("handler already registered for type {0:?}")]
    DuplicateHandler(String),
}

/// Бизнес-отказ обработчика.
///
/// Движок не пропускает отказ через протокольную границу: вместо этого он
/// кодирует ответ, несущий `code` в поле кода ошибки.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("handler rejected telegram with error code {code:?}")]
pub struct HandlerError {
    /// код ошибки протокола (до 8 символов на проводе)
    pub code: String,
}

impl HandlerError {
    /// Отказ с заданным кодом ошибки.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Ошибки обработки одной телеграммы движком.
///
/// Все варианты локальны для телеграммы: канал остаётся открытым,
/// следующие вызовы движка не затрагиваются.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Телеграмма не декодируется
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Для типа, требующего ответа, не зарегистрирован обработчик
    #[error("no handler registered for reply-requiring type {0:?}")]
    NoHandler(String),

    /// Обработчик не дал тела ответа для типа, требующего ответа
    #[error("handler returned no reply body for type {0:?}")]
    MissingReply(String),
}
