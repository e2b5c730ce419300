/// sync-маркер заголовка по умолчанию
pub(crate) const DEFAULT_SYNC: &str = "###";
