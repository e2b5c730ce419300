use chrono::NaiveDateTime;

use crate::constants::{TIMESTAMP_PATTERN, TIMESTAMP_WIDTH};
use crate::error::FieldError;

/// Дополняет `text` символами `filler` справа до ширины `width`.
///
/// Заполнитель только дописывается в конец; содержимое не подменяется.
/// Если текст уже не короче `width`, он возвращается без изменений —
/// обрезки не бывает.
pub fn pad_right(text: &str, width: usize, filler: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + (width - len));
    out.push_str(text);
    for _ in len..width {
        out.push(filler);
    }
    out
}

/// Вырезает поле фиксированной ширины `width` по смещению `offset`.
///
/// Не паникует: слишком короткая телеграмма (или срез внутрь не-ASCII
/// символа) даёт [`FieldError::Truncated`].
pub fn take<'a>(
    raw: &'a str,
    field: &'static str,
    offset: usize,
    width: usize,
) -> Result<&'a str, FieldError> {
    raw.get(offset..offset + width).ok_or(FieldError::Truncated {
        field,
        offset,
        need: width,
        got: raw.len(),
    })
}

/// Форматирует метку времени в 14 символов yyyyMMddHHmmss.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_PATTERN).to_string()
}

/// Разбирает 14-символьную метку времени; любое отклонение от паттерна — ошибка.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, FieldError> {
    if raw.len() != TIMESTAMP_WIDTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::BadTimestamp {
            value: raw.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(raw, TIMESTAMP_PATTERN).map_err(|_| FieldError::BadTimestamp {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn pad_right_appends_filler_to_width() {
        assert_eq!(pad_right("AB", 5, '*'), "AB***");
        assert_eq!(pad_right("", 3, ' '), "   ");
    }

    #[test]
    fn pad_right_leaves_long_text_unchanged() {
        // ровно по ширине и длиннее — без изменений, обрезки нет
        assert_eq!(pad_right("ABCDE", 5, '*'), "ABCDE");
        assert_eq!(pad_right("ABCDEF", 5, '*'), "ABCDEF");
    }

    #[test]
    fn pad_right_is_idempotent() {
        let once = pad_right("R", 4, '*');
        assert_eq!(pad_right(&once, 4, '*'), once);
    }

    #[test]
    fn pad_right_does_not_touch_inner_spaces() {
        // пробел в payload — легальный символ; подмены на заполнитель нет
        assert_eq!(pad_right("A B", 6, '*'), "A B***");
    }

    #[test]
    fn take_slices_fixed_width_field() {
        assert_eq!(take("REQ_0000001", "type id", 0, 4).unwrap(), "REQ_");
        assert_eq!(take("REQ_0000001", "unit", 4, 7).unwrap(), "0000001");
    }

    #[test]
    fn take_fails_on_short_telegram() {
        let err = take("REQ", "type id", 0, 4).unwrap_err();
        assert!(matches!(
            err,
            FieldError::Truncated {
                field: "type id",
                need: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn take_fails_inside_multibyte_char_instead_of_panicking() {
        let err = take("я1234", "unit", 1, 2).unwrap_err();
        assert!(matches!(err, FieldError::Truncated { .. }));
    }

    #[test]
    fn timestamp_roundtrip() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        let text = format_timestamp(ts);
        assert_eq!(text, "20240307150405");
        assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn parse_timestamp_rejects_wrong_width_and_junk() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("20240307").is_err());
        assert!(parse_timestamp("2024030715040X").is_err());
        assert!(parse_timestamp("202403071504055").is_err());
    }

    #[test]
    fn parse_timestamp_rejects_impossible_dates() {
        // нет 13-го месяца и 99-й секунды
        assert!(parse_timestamp("20241307150405").is_err());
        assert!(parse_timestamp("20240307150499").is_err());
    }
}
