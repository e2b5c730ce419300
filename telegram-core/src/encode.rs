use crate::constants::{ERROR_CODE_WIDTH, FILLER};
use crate::fields::{format_timestamp, pad_right};
use crate::message::{LOCATION_WIDTH, Message, MessageBody, UNIT_WIDTH};

/// Рендерит сообщение в телеграмму фиксированного формата.
///
/// Порядок полей: заголовочная часть, идентификатор типа, бизнес-поля тела
/// по своим ширинам, код ошибки (8 символов, пробелы если кода нет), метка
/// времени (14), затем добивка заполнителем до заявленной полной длины.
/// Обрезки не бывает: если естественная длина не меньше заявленной, текст
/// возвращается как есть.
pub fn encode(message: &Message) -> String {
    let mut out = String::with_capacity(message.header.total_length);
    out.push_str(&message.header.render());
    out.push_str(message.type_id());
    render_body(&message.body, &mut out);

    match &message.error_code {
        Some(code) => out.push_str(&pad_right(code, ERROR_CODE_WIDTH, ' ')),
        None => out.push_str(&" ".repeat(ERROR_CODE_WIDTH)),
    }
    out.push_str(&format_timestamp(message.created));

    pad_right(&out, message.header.total_length, FILLER)
}

fn render_body(body: &MessageBody, out: &mut String) {
    match body {
        MessageBody::MovementRequest {
            unit,
            actual,
            target,
        }
        | MessageBody::MovementResponse {
            unit,
            actual,
            target,
        } => {
            out.push_str(&pad_right(unit, UNIT_WIDTH, ' '));
            out.push_str(&pad_right(actual, LOCATION_WIDTH, ' '));
            out.push_str(&pad_right(target, LOCATION_WIDTH, ' '));
        }
        MessageBody::TimesyncRequest | MessageBody::TimesyncResponse | MessageBody::FaultReport => {
        }
    }
}
