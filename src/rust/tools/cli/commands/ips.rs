use anyhow::{Result, anyhow};
use clap::Args;
use std::path::PathBuf;

use crate::engine::{CallSite, Evaluator, OperatorRegistry};
use crate::language::Cursor;
use crate::tools::cli::io::{load_document, parse_tokens};
use crate::tools::cli::state::CliContext;
use crate::tools::logger::StructuredError;

#[derive(Debug, Clone, Args)]
pub struct IpsCommand {
    /// Arguments: <ip-or-cidr> <index> [count]; `$.path` reads from --data, `$NAME` from the environment
    #[arg(required = true, allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// JSON or TOML document that `$.path` arguments resolve against
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Reject bare-address offsets that wrap past the address space
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl IpsCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let mut config = ctx.config().clone();
        config.ips.strict_bare_addresses |= self.strict;

        let document = load_document(self.data.as_deref())?;
        let args = parse_tokens(&self.args)?;
        let call = CallSite::new(Cursor::root(), "ips", args);

        let evaluator =
            Evaluator::from_config(OperatorRegistry::new(), &config).with_logger((*logger).clone());

        match evaluator.evaluate(&document, &call) {
            Ok(response) => {
                let json = response.value.to_json();
                let rendered = if self.pretty {
                    serde_json::to_string_pretty(&json)?
                } else {
                    serde_json::to_string(&json)?
                };
                println!("{}", rendered);
                Ok(())
            }
            Err(err) => {
                logger.log_structured_error(&StructuredError::from_operator_error("ips", &err));
                Err(anyhow!("{} ({})", err.kind().code(), err))
            }
        }
    }
}
