use crate::cli::RenderArgs;
use crate::context::CliContext;
use crate::output;
use rapport_domain::{ReportFormat, ReportOperations};
use rapport_tui::{copy_report, CopyOutcome, SystemClipboard};

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(&ctx.report)
}

/// Rendered output goes to stdout as-is so it can be piped; only a write to
/// `--output` reports back as JSON.
pub async fn handle_render(ctx: &CliContext, args: RenderArgs) -> anyhow::Result<()> {
    let format: ReportFormat = args.format.into();
    let rendered = ctx.render(format)?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, rendered.as_bytes()).await?;
            tracing::info!("Rendered report written to {}", path.display());
            output::output_success(serde_json::json!({
                "path": path.display().to_string(),
                "bytes": rendered.len(),
            }))
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

pub fn handle_copy(ctx: &CliContext) -> anyhow::Result<()> {
    let mut clipboard = SystemClipboard::new();
    let outcome = copy_report(&mut clipboard, &ctx.report)?;
    let copied = match outcome {
        CopyOutcome::Rich => "html",
        CopyOutcome::PlainText => "text",
    };
    output::output_success(serde_json::json!({ "copied": copied }))
}

pub async fn handle_reset(ctx: &mut CliContext) -> anyhow::Result<()> {
    ctx.reset_report()?;
    ctx.save().await?;
    output::output_success(&ctx.report)
}
