/// Ширина sync-маркера в заголовочной части.
pub const SYNC_WIDTH: usize = 3;

/// Ширина поля полной длины телеграммы.
pub const LENGTH_WIDTH: usize = 5;

/// Ширина идентификаторов отправителя и получателя.
pub const ADDRESS_WIDTH: usize = 5;

/// Ширина порядкового номера.
pub const SEQUENCE_WIDTH: usize = 5;

/// Полная ширина заголовочной части телеграммы.
pub const HEADER_WIDTH: usize = SYNC_WIDTH + LENGTH_WIDTH + 2 * ADDRESS_WIDTH + SEQUENCE_WIDTH;

/// Ширина идентификатора типа телеграммы.
pub const TYPE_ID_WIDTH: usize = 4;

/// Смещение первого поля тела от начала телеграммы.
pub const BODY_OFFSET: usize = HEADER_WIDTH + TYPE_ID_WIDTH;

/// Ширина кода ошибки.
pub const ERROR_CODE_WIDTH: usize = 8;

/// Ширина метки времени (yyyyMMddHHmmss).
pub const TIMESTAMP_WIDTH: usize = 14;

/// chrono-паттерн метки времени.
pub const TIMESTAMP_PATTERN: &str = "%Y%m%d%H%M%S";

/// Хвостовой блок "код ошибки + метка времени": присутствует целиком либо никак.
pub const TRAILER_WIDTH: usize = ERROR_CODE_WIDTH + TIMESTAMP_WIDTH;

/// Символ-заполнитель: добивает телеграмму до заявленной полной длины.
pub const FILLER: char = '*';
