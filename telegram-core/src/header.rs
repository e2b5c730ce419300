use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ADDRESS_WIDTH, HEADER_WIDTH, LENGTH_WIDTH, SEQUENCE_WIDTH, SYNC_WIDTH};
use crate::error::FieldError;
use crate::fields::pad_right;

/// Имена полей заголовка в карте, которую передаёт транспортный уровень.
pub mod field_names {
    /// sync-маркер
    pub const SYNC: &str = "sync";
    /// полная длина телеграммы
    pub const LENGTH: &str = "length";
    /// идентификатор отправителя
    pub const SENDER: &str = "sender";
    /// идентификатор получателя
    pub const RECEIVER: &str = "receiver";
    /// порядковый номер
    pub const SEQUENCE: &str = "sequence";
}

/// Поля заголовка, уже разобранные транспортом.
pub type HeaderFields = HashMap<String, String>;

/// Заголовок телеграммы.
///
/// Неизменяемый value-object: заголовок никогда не правится на месте,
/// производный экземпляр для ответа всегда строится через [`Header::reply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// sync-маркер; в ответ уходит без изменений
    pub sync: String,
    /// заявленная полная длина телеграммы в символах
    pub total_length: usize,
    /// идентификатор отправителя
    pub sender: String,
    /// идентификатор получателя
    pub receiver: String,
    /// порядковый номер в рамках диалога
    pub sequence: u32,
}

impl Header {
    /// Собирает заголовок из карты полей транспортного уровня.
    pub fn from_fields(fields: &HeaderFields) -> Result<Self, FieldError> {
        Ok(Self {
            sync: text_field(fields, field_names::SYNC)?,
            total_length: number_field(fields, field_names::LENGTH)?,
            sender: text_field(fields, field_names::SENDER)?,
            receiver: text_field(fields, field_names::RECEIVER)?,
            sequence: number_field(fields, field_names::SEQUENCE)?,
        })
    }

    /// Обратная конвертация — карта полей, как её отдал бы транспорт.
    pub fn to_fields(&self) -> HeaderFields {
        HeaderFields::from([
            (field_names::SYNC.to_string(), self.sync.clone()),
            (field_names::LENGTH.to_string(), self.total_length.to_string()),
            (field_names::SENDER.to_string(), self.sender.clone()),
            (field_names::RECEIVER.to_string(), self.receiver.clone()),
            (field_names::SEQUENCE.to_string(), self.sequence.to_string()),
        ])
    }

    /// Текстовое представление заголовочной части телеграммы.
    ///
    /// Длина и порядковый номер дополняются нулями слева до фиксированной
    /// ширины, поэтому ширина поля длины не зависит от его значения.
    pub fn render(&self) -> String {
        format!(
            "{}{:0lw$}{}{}{:0sw$}",
            pad_right(&self.sync, SYNC_WIDTH, ' '),
            self.total_length,
            pad_right(&self.sender, ADDRESS_WIDTH, ' '),
            pad_right(&self.receiver, ADDRESS_WIDTH, ' '),
            self.sequence,
            lw = LENGTH_WIDTH,
            sw = SEQUENCE_WIDTH,
        )
    }

    /// Заголовок ответа на эту телеграмму.
    ///
    /// sync сохраняется, отправитель и получатель меняются ролями,
    /// порядковый номер растёт на единицу, полная длина пересчитывается
    /// под payload ответа. Входной заголовок не мутируется.
    pub fn reply(&self, payload_width: usize) -> Header {
        Header {
            sync: self.sync.clone(),
            total_length: HEADER_WIDTH + payload_width,
            sender: self.receiver.clone(),
            receiver: self.sender.clone(),
            sequence: self.sequence + 1,
        }
    }
}

fn text_field(fields: &HeaderFields, name: &'static str) -> Result<String, FieldError> {
    fields
        .get(name)
        .map(|v| v.trim().to_string())
        .ok_or(FieldError::MissingHeaderField(name))
}

fn number_field<T: std::str::FromStr>(
    fields: &HeaderFields,
    name: &'static str,
) -> Result<T, FieldError> {
    let value = text_field(fields, name)?;
    value.parse().map_err(|_| FieldError::BadHeaderNumber {
        field: name,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_header() -> Header {
        Header {
            sync: "###".to_string(),
            total_length: 50,
            sender: "WMS".to_string(),
            receiver: "PLC1".to_string(),
            sequence: 5,
        }
    }

    #[test]
    fn from_fields_builds_header() {
        let got = Header::from_fields(&mk_header().to_fields()).unwrap();
        assert_eq!(got, mk_header());
    }

    #[test]
    fn from_fields_trims_transport_padding() {
        let mut fields = mk_header().to_fields();
        fields.insert(field_names::SENDER.to_string(), "WMS  ".to_string());
        let got = Header::from_fields(&fields).unwrap();
        assert_eq!(got.sender, "WMS");
    }

    #[test]
    fn from_fields_fails_on_missing_field() {
        let mut fields = mk_header().to_fields();
        fields.remove(field_names::RECEIVER);

        let err = Header::from_fields(&fields).unwrap_err();
        assert!(matches!(
            err,
            FieldError::MissingHeaderField(field_names::RECEIVER)
        ));
    }

    #[test]
    fn from_fields_fails_on_non_numeric_length() {
        let mut fields = mk_header().to_fields();
        fields.insert(field_names::LENGTH.to_string(), "5O".to_string());

        let err = Header::from_fields(&fields).unwrap_err();
        assert!(matches!(
            err,
            FieldError::BadHeaderNumber {
                field: field_names::LENGTH,
                ..
            }
        ));
    }

    #[test]
    fn render_produces_fixed_width_header_region() {
        let text = mk_header().render();
        assert_eq!(text, "###00050WMS  PLC1 00005");
        assert_eq!(text.len(), HEADER_WIDTH);
    }

    #[test]
    fn reply_swaps_roles_and_increments_sequence() {
        let inbound = mk_header();
        let reply = inbound.reply(44);

        assert_eq!(reply.sender, inbound.receiver);
        assert_eq!(reply.receiver, inbound.sender);
        assert_eq!(reply.sequence, inbound.sequence + 1);
        assert_eq!(reply.sync, inbound.sync);
        assert_eq!(reply.total_length, HEADER_WIDTH + 44);

        // входной заголовок не изменился
        assert_eq!(inbound, mk_header());
    }

    #[test]
    fn reply_twice_advances_sequence_by_two() {
        let twice = mk_header().reply(44).reply(44);
        assert_eq!(twice.sequence, mk_header().sequence + 2);
        assert_eq!(twice.sender, mk_header().sender);
    }
}
