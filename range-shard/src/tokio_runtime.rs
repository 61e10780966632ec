use std::sync::OnceLock;

use crate::{LogicDomain, LogicDomainConfig, LogicDomainError};

static GLOBAL: OnceLock<LogicDomain> = OnceLock::new();

pub(crate) fn build(config: &LogicDomainConfig) -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads.max(1))
        .thread_name(config.thread_name.clone())
        .enable_all()
        .build()
}

pub(crate) fn get() -> Result<&'static LogicDomain, LogicDomainError> {
    if let Some(domain) = GLOBAL.get() {
        return Ok(domain);
    }
    let domain = LogicDomain::new(LogicDomainConfig::default())?;
    // A racing initializer may win; the losing runtime is shut down on drop.
    Ok(GLOBAL.get_or_init(|| domain))
}
