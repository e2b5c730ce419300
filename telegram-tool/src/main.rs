//! Точка входа `telegram-tool`.
//!
//! Жизненный цикл:
//! - парсинг CLI и чтение телеграммы (строка или файл)
//! - сборка движка: реестр стандартных типов + обработчики-подтверждения
//! - прогон телеграммы через конвейер
//! - печать результата: JSON декодированного сообщения и, если запрошено,
//!   телеграмма ответа

mod cli;
mod config;
mod handlers;
mod input;

use std::collections::HashSet;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use telegram_core::engine::{Outcome, TelegramEngine};
use telegram_core::message::type_ids;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/trace
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let raw = input::load_telegram(&args).context("read telegram")?;
    let header = args.header(raw.len());
    let fields = header.to_fields();

    info!(
        "processing telegram: len={}, sender={}, receiver={}, sequence={}",
        raw.len(),
        header.sender,
        header.receiver,
        header.sequence
    );

    let known_targets: Option<HashSet<String>> = args
        .known_targets
        .as_deref()
        .map(input::parse_locations_csv)
        .map(|locations| locations.into_iter().collect());

    let engine = TelegramEngine::builder()
        .standard_types()?
        .handler(
            type_ids::MOVEMENT_REQUEST,
            Box::new(handlers::MovementAck { known_targets }),
        )?
        .handler(type_ids::TIMESYNC_REQUEST, Box::new(handlers::TimesyncAck))?
        .build();

    match engine.process(&raw, &fields) {
        Ok(Outcome::Skipped) => {
            info!("empty frame, nothing to do");
            println!("SKIPPED");
        }
        Ok(Outcome::Processed {
            message,
            handler_error,
        }) => {
            if let Some(e) = handler_error {
                warn!("handler side effect failed: {e}");
            }
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        Ok(Outcome::Replied {
            inbound, telegram, ..
        }) => {
            println!("{}", serde_json::to_string_pretty(&inbound)?);
            if args.reply {
                println!("{telegram}");
            }
        }
        Err(e) => {
            // ошибка локальна для телеграммы: канал у транспорта остаётся
            // открытым, но инструмент отдаёт ненулевой код выхода
            anyhow::bail!("telegram rejected: {e}");
        }
    }

    Ok(())
}
