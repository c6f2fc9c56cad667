use crate::cli::MetaArgs;
use crate::context::CliContext;
use crate::output;
use rapport_domain::{MetaUpdate, ReportOperations};

/// Without any flag, prints the current header unchanged.
pub async fn handle(ctx: &mut CliContext, args: MetaArgs) -> anyhow::Result<()> {
    let update = MetaUpdate {
        title: args.title,
        date: args.date,
        author: args.author,
    };
    if !update.is_change() {
        return output::output_success(&ctx.report.meta);
    }
    let meta = ctx.update_meta(update)?;
    ctx.save().await?;
    output::output_success(meta)
}
