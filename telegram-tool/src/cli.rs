use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};

use telegram_core::header::Header;

use crate::config;

/// Telegram Tool - разбор телеграмм протокола и сборка ответов движком.
///
/// Телеграмма подаётся строкой (--telegram) или файлом (--telegram-file);
/// поля заголовка, которые обычно разбирает транспорт, задаются флагами.
#[derive(Parser, Debug, Clone)]
#[command(name = "telegram-tool", version, about)]
#[command(
    group(
        ArgGroup::new("telegram_source")
            .required(true)
            .args(["telegram", "telegram_file"])
    )
)]
pub(crate) struct Args {
    /// Текст телеграммы. Нельзя вместе с --telegram-file
    #[arg(long, conflicts_with = "telegram_file")]
    pub(crate) telegram: Option<String>,

    /// Файл с телеграммой (первая строка). Нельзя вместе с --telegram
    #[arg(long, conflicts_with = "telegram")]
    pub(crate) telegram_file: Option<PathBuf>,

    /// sync-маркер заголовка
    #[arg(long, default_value = config::DEFAULT_SYNC)]
    pub(crate) sync: String,

    /// Заявленная полная длина телеграммы
    /// (по умолчанию — фактическая длина поданного текста)
    #[arg(long)]
    pub(crate) length: Option<usize>,

    /// Идентификатор отправителя
    #[arg(long)]
    pub(crate) sender: String,

    /// Идентификатор получателя
    #[arg(long)]
    pub(crate) receiver: String,

    /// Порядковый номер телеграммы
    #[arg(long)]
    pub(crate) sequence: u32,

    /// Напечатать телеграмму ответа движка (для типов, требующих ответа)
    #[arg(long)]
    pub(crate) reply: bool,

    /// Известные целевые локации (CSV, например "AREA1,AREA2").
    /// Без флага перемещения подтверждаются без проверки
    #[arg(long)]
    pub(crate) known_targets: Option<String>,
}

impl Args {
    /// Валидация аргументов (файл существует и т.п.)
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(path) = &self.telegram_file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("telegram file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--telegram-file must point to a file: {:?}", path);
            }
        }

        // ArgGroup уже гарантирует ровно один источник, но оставим защиту:
        if self.telegram.is_none() && self.telegram_file.is_none() {
            bail!("either --telegram or --telegram-file must be provided");
        }

        Ok(())
    }

    /// Заголовок из флагов; длина по умолчанию — фактическая длина телеграммы.
    pub(crate) fn header(&self, telegram_len: usize) -> Header {
        Header {
            sync: self.sync.clone(),
            total_length: self.length.unwrap_or(telegram_len),
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
            sequence: self.sequence,
        }
    }
}
