use imgbatch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch, run_list};
use imgbatch_lib::error::ImgBatchError;

// Downloads run strictly one after another, so one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ImgBatchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        // Failed downloads are reported in the summary; the exit status stays 0.
        ResolvedCommand::Fetch(params) => {
            run_fetch(params).await?;
        }
        ResolvedCommand::List(params) => run_list(params).await?,
    }

    Ok(())
}
