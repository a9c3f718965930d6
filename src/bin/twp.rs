use std::process::ExitCode;

use anyhow::Result;
use tailwind_playground::app::run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    run().await
}
