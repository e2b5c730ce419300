use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Читает телеграмму из reader: первая строка без перевода строки.
pub(crate) fn read_telegram<R: io::Read>(reader: R) -> io::Result<String> {
    let mut buf = BufReader::new(reader);
    let mut line = String::new();
    buf.read_line(&mut line)?;

    // телеграмма — ровно одна строка; CR/LF не часть кадра
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

/// Читает телеграмму из файла.
pub(crate) fn read_telegram_from_path(path: impl AsRef<Path>) -> io::Result<String> {
    let f = File::open(path)?;
    read_telegram(f)
}

/// Телеграмма из аргументов: инлайн-текст или файл.
pub(crate) fn load_telegram(args: &crate::cli::Args) -> io::Result<String> {
    match (&args.telegram, &args.telegram_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => read_telegram_from_path(path),
        (None, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no telegram source given",
        )),
    }
}

/// Разбирает CSV-список локаций вида "AREA1, area2, ,AREA1".
/// Правила:
/// - разделитель: запятая
/// - trim пробелов
/// - пустые элементы игнорируются
/// - нормализация: ASCII uppercase
/// - результат: отсортирован + уникален (BTreeSet)
pub(crate) fn parse_locations_csv(raw: &str) -> Vec<String> {
    let mut set = BTreeSet::new();

    for part in raw.split(',') {
        let loc = part.trim();
        if loc.is_empty() {
            continue;
        }
        set.insert(loc.to_ascii_uppercase());
    }

    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn read_telegram_takes_first_line_without_newline() {
        let input = "###00050WMS  PLC1 00005REQ_0000001 AREA1AREA2*****\nignored";
        let got = read_telegram(Cursor::new(input)).unwrap();
        assert_eq!(got, "###00050WMS  PLC1 00005REQ_0000001 AREA1AREA2*****");
    }

    #[test]
    fn read_telegram_strips_crlf() {
        let got = read_telegram(Cursor::new("REQ_\r\n")).unwrap();
        assert_eq!(got, "REQ_");
    }

    #[test]
    fn read_telegram_keeps_empty_frame_empty() {
        assert_eq!(read_telegram(Cursor::new("")).unwrap(), "");
        assert_eq!(read_telegram(Cursor::new("\n")).unwrap(), "");
    }

    #[test]
    fn read_telegram_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "###00050WMS  PLC1 00005SYNQ").unwrap();

        let got = read_telegram_from_path(file.path()).unwrap();
        assert_eq!(got, "###00050WMS  PLC1 00005SYNQ");
    }

    #[test]
    fn parse_locations_csv_sorts_dedups_and_filters_empty() {
        let got = parse_locations_csv(" area2, AREA1, ,area1 ,AREA2,, ");
        assert_eq!(got, vec!["AREA1", "AREA2"]);
    }

    #[test]
    fn parse_locations_csv_empty_gives_empty_vec() {
        assert!(parse_locations_csv("").is_empty());
        assert!(parse_locations_csv(" , ,  ,").is_empty());
    }
}
