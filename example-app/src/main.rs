//! # 撮合服务器启动程序
//!
//! 演示启动配置解析：读取配置文件，激活日志输出端，装配进程级日志，
//! 然后输出解析得到的配置快照。

use anyhow::{Context, Result};
use clap::Parser;
use config_abstractions::LoggerSink;
use config_impl::{InMemoryLoggingActivator, LoggerSettings, TomlKeyValueProvider};
use server_configuration::{ResolvedConfiguration, ServerConfigurationResolver};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn 撮合服务器启动程序")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/server.toml")]
    config: String,

    /// 日志级别（trace、debug、info、warn、error）
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    log_level: Level,

    /// 以 JSON 输出解析后的配置
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let activator = InMemoryLoggingActivator::new();
    let configuration = resolve_configuration(&args, &activator)?;
    let settings = activator.settings();

    install_logging(&settings, args.log_level)?;
    info!("启动 Lorn 撮合服务器");
    report(&configuration, &settings);

    if args.print {
        let dump = serde_json::json!({
            "configuration": configuration,
            "logger": settings,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    Ok(())
}

/// 解析启动配置
///
/// 进程日志尚未装配，解析过程的日志临时输出到标准错误。
fn resolve_configuration(
    args: &Args,
    activator: &InMemoryLoggingActivator,
) -> Result<ResolvedConfiguration> {
    let bootstrap = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        let mut resolver = ServerConfigurationResolver::new(TomlKeyValueProvider::new(), activator);
        resolver.resolve(&args.config).map_err(|e| {
            error!("服务器配置解析失败，停止启动: {}", e);
            e
        })
    })
    .with_context(|| format!("无法解析服务器配置: {}", args.config))
}

/// 根据已激活的输出端装配进程日志
fn install_logging(settings: &LoggerSettings, log_level: Level) -> Result<()> {
    let filter = EnvFilter::default().add_directive(log_level.into());

    let console = settings
        .sink(LoggerSink::ConsoleOutput)
        .enabled
        .then(|| fmt::layer().with_writer(std::io::stdout));

    let file_sink = settings.sink(LoggerSink::File);
    let file = match (file_sink.enabled, file_sink.resource_name.as_deref()) {
        (true, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("无法打开日志文件: {path}"))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("日志初始化失败")?;

    if file_sink.enabled && file_sink.resource_name.is_none() {
        warn!("日志输出端 {} 已启用但未配置资源名，已忽略", LoggerSink::File);
    }
    if settings.sink(LoggerSink::MemoryMappedFile).enabled {
        warn!("日志输出端 {} 暂无实现，已忽略", LoggerSink::MemoryMappedFile);
    }
    Ok(())
}

/// 输出配置摘要
fn report(configuration: &ResolvedConfiguration, settings: &LoggerSettings) {
    info!("单实例端口: {}", configuration.single_instance_tcp_port());
    info!("进程优先级: {}", configuration.process_priority());
    if let Some(path) = configuration.offline_order_entry_file() {
        info!("离线委托文件: {}", path);
    }
    info!(
        "日志缓冲区: {:?}, 输出端: {:?}",
        settings.buffer_size,
        settings.enabled_sinks()
    );
    info!("交易品种: {}", configuration.symbols().join(", "));

    if configuration.is_matching_multithreaded() {
        let params = configuration.thread_pool_parameters();
        info!(
            "多线程撮合: 绑核={}, 超线程={}, 队列长度={}, 栈大小={}, 优先级={}",
            params.pin_threads_to_cores,
            params.hyper_threading,
            params.work_queue_size_per_thread,
            params.thread_stack_size,
            params.thread_priority
        );
    } else {
        info!("单线程撮合");
    }
}

/// 解析日志级别，未知级别直接拒绝
fn parse_log_level(level: &str) -> Result<Level, String> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| format!("未知的日志级别: {level}"))
}
