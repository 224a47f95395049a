use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::engine::{CallSite, Evaluator};
use crate::language::Cursor;
use crate::tools::cli::io::{load_document, parse_tokens};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct DepsCommand {
    /// Call arguments, as for `ips`
    #[arg(required = true, allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Document whose locations are scanned
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Extra dependency appended as-is (repeatable)
    #[arg(long = "auto")]
    pub auto: Vec<String>,
}

impl DepsCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let document = load_document(self.data.as_deref())?;
        let locations = document.locations();
        let auto = self
            .auto
            .iter()
            .map(|p| p.trim_start_matches("$.").parse::<Cursor>())
            .collect::<Result<Vec<_>, _>>()?;

        let call = CallSite::new(Cursor::root(), "ips", parse_tokens(&self.args)?);
        let deps = Evaluator::default().dependencies_of(&call, &locations, &auto);

        logger.debug(format!(
            "{} known location(s), {} dependency edge(s)",
            locations.len(),
            deps.len()
        ));

        for dep in &deps {
            println!("$.{}", dep);
        }
        logger.info(format!("{} dependency location(s) found", deps.len()));
        Ok(())
    }
}
