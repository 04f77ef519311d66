use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::{
    console::Console, error::AppResult, render, services::report_service, state::AppState,
};

pub async fn sales<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let report = report_service::sales_report(state).await?;
    render::sales_report(console.out(), &report)?;
    Ok(())
}
