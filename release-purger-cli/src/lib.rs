use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use secrecy::SecretString;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use release_purger_core::{
    ClientConfig, DraftPurger, GitHubClient, PurgeConfig, PurgeEvent, PurgeResult, ReleaseApi,
    client::DEFAULT_API_URL,
};

const EXAMPLE_SLUG: &str = "digabi/naksu";
const EXAMPLE_TOKEN: &str = "13e74e84727837072a36f84402d8b2005c35185a";

#[derive(Parser)]
#[command(name = "release-purger")]
#[command(about = "Delete draft releases from a GitHub repository")]
#[command(version)]
pub struct Cli {
    /// Repository in owner/name form (put `--` before arguments starting with `-`)
    pub repository_slug: String,

    /// OAuth token with write access to the repository's releases
    pub oauth_token: String,

    /// GitHub API root
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each API request (seconds, 0 disables it)
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Dry run - list drafts without deleting them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Ignore HTTP(S)_PROXY environment variables
    #[arg(long)]
    pub no_proxy: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// 参数数量不对时打印的用法说明
pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} GitHub_slug GitHub_OAuth_token\n       {program} {EXAMPLE_SLUG} {EXAMPLE_TOKEN}"
    )
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "release-purger".to_string())
}

pub fn run_cli() -> Result<ExitCode> {
    run_cli_from(std::env::args_os(), &mut io::stdout())
}

/// 用给定的命令行参数运行，所有报告写到 `out`
///
/// 参数无法解析（数量不对、未知选项、非 UTF-8）时输出用法并返回失败退出码，
/// 不发出任何网络请求。
pub fn run_cli_from<I, T, W>(args: I, out: &mut W) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(_) => {
            writeln!(out, "{}", usage(&program))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    // 设置日志级别
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    // 重复调用时保留已安装的 subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(format!(
            "release_purger_core={log_level},release_purger_cli={log_level}"
        ))
        .with_writer(io::stderr)
        .try_init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(handle_purge(&cli, out))?;
    debug!(
        "deleted {:?}, failed {:?}, skipped {}, would delete {:?}",
        result.deleted, result.failed, result.skipped, result.would_delete
    );

    // 单个删除失败不影响退出码
    Ok(ExitCode::SUCCESS)
}

/// `main` 打印致命错误时使用的文本
pub fn render_error(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

async fn handle_purge<W: Write>(cli: &Cli, out: &mut W) -> Result<PurgeResult> {
    let token = SecretString::from(cli.oauth_token.clone());
    let client = GitHubClient::new(&cli.repository_slug, &token, &create_client_config(cli))?;
    let purger = DraftPurger::new(
        client,
        PurgeConfig {
            dry_run: cli.dry_run,
        },
    );

    purge_to(&purger, out).await
}

fn create_client_config(cli: &Cli) -> ClientConfig {
    ClientConfig {
        api_url: cli.api_url.clone(),
        timeout_seconds: cli.timeout,
        use_system_proxy: !cli.no_proxy,
        ..Default::default()
    }
}

/// 运行清理并把每条结果写到 `out`
pub async fn purge_to<A, W>(purger: &DraftPurger<A>, out: &mut W) -> Result<PurgeResult>
where
    A: ReleaseApi,
    W: Write,
{
    let mut write_error = None;
    let result = purger
        .purge_with_progress(|event| {
            if write_error.is_none() {
                if let Err(e) = writeln!(out, "{}", render_event(&event)) {
                    write_error = Some(e);
                }
            }
        })
        .await?;

    if let Some(e) = write_error {
        return Err(e).context("failed to write report");
    }

    Ok(result)
}

/// 单条结果的输出文本
pub fn render_event(event: &PurgeEvent) -> String {
    match event {
        PurgeEvent::NoReleases => "There are no draft releases in the given GitHub repo".to_string(),
        PurgeEvent::Deleting { id } => format!("Deleting draft release: {id}"),
        PurgeEvent::Deleted { .. } => "Deleted".to_string(),
        PurgeEvent::DeleteFailed { status, .. } => format!("Failed, HTTP status code: {status}"),
        PurgeEvent::DeleteErrored { message, .. } => format!("Failed: {message}"),
        PurgeEvent::DryRun { id } => format!("Would delete draft release: {id} (dry run)"),
        PurgeEvent::Skipped { id, name } => format!("Skipping release #{id} ({name})"),
    }
}
