mod latex_generator;
mod latex_string;
mod tex_render;
mod utils;

pub mod allocation;
pub mod balance;
pub mod input;
pub mod report;
pub mod session;
pub mod time;

use std::path::PathBuf;

use log::info;

use crate::balance::format_balance;
use crate::input::Config;
use crate::session::Session;

pub use crate::tex_render::RenderingError;

/// Builds the session described by the config: the month is generated, the weekly
/// allocation is assigned and the explicit days of the month file are applied on top.
pub fn prepare_session(config: &Config) -> anyhow::Result<Session> {
    let key = config.key();
    let mut session = Session::new(config.settings().clone());

    session.generate(key.year().as_usize(), key.month().as_usize())?;
    session.apply_weekly(key)?;

    let table = session
        .table(key)
        .ok_or_else(|| anyhow::anyhow!("the allocation of {} has not been generated", key))?;
    let batch = config.month().edits(table);
    if !batch.is_empty() {
        info!("applying {} explicit days", batch.len());
        session.apply_edits(key, &batch)?;
    }

    Ok(session)
}

/// Renders the report described by the config and returns the path of the written file.
pub fn generate_report(config: &Config) -> anyhow::Result<PathBuf> {
    let key = config.key();
    let mut session = prepare_session(config)?;
    info!("balance: {} hours", format_balance(session.balance()));

    info!("generating report for {}", key);
    let document = session.export(
        key.year().as_usize(),
        key.month().as_usize(),
        config.export_options(),
    )?;

    let path = document.write_to(config.output())?;
    info!("wrote {} to {}", report::Document::MIME_TYPE, path.display());

    Ok(path)
}
