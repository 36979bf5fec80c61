//! 服务器启动配置解析器

use crate::constants::*;
use crate::sinks::activate_logging;
use crate::snapshot::ResolvedConfiguration;
use crate::thread_pool::{ThreadPoolParameters, ThreadPriority};
use config_abstractions::{KeyValueProvider, LoggingActivator};
use infrastructure_common::{ConfigError, ConfigResult};
use tracing::{debug, info};

/// 服务器配置解析器
///
/// 持有配置提供者和注入的日志激活器，按固定顺序读取配置并生成
/// [`ResolvedConfiguration`]。解析是同步的，应在其他子系统启动之前完成。
pub struct ServerConfigurationResolver<'a, P> {
    provider: P,
    logging: &'a dyn LoggingActivator,
}

impl<P> std::fmt::Debug for ServerConfigurationResolver<'_, P>
where
    P: KeyValueProvider,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfigurationResolver")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl<'a, P> ServerConfigurationResolver<'a, P>
where
    P: KeyValueProvider,
{
    /// 创建新的配置解析器
    pub fn new(provider: P, logging: &'a dyn LoggingActivator) -> Self {
        Self { provider, logging }
    }

    /// 从指定配置源解析启动配置
    ///
    /// # Errors
    ///
    /// - [`ConfigError::SourceUnavailable`]：配置源无法打开
    /// - [`ConfigError::KeyNotFound`]：缺少 `LOGGER_BUFFER_SIZE`
    /// - [`ConfigError::MalformedValue`]：配置值类型或取值无效
    /// - [`ConfigError::NoSymbolsConfigured`]：交易品种列表为空
    pub fn resolve(&mut self, source: &str) -> ConfigResult<ResolvedConfiguration> {
        info!("解析服务器配置: {} ({})", source, self.provider.name());
        self.provider.load(source)?;

        let single_instance_tcp_port = self.read_port()?;
        let process_priority = self
            .provider
            .get_string_or(PROCESS_PRIORITY, DEFAULT_PROCESS_PRIORITY)?;

        let offline_order_entry_file = if self.provider.has(OFFLINE_ORDER_ENTRY_FILE) {
            Some(self.provider.get_string(OFFLINE_ORDER_ENTRY_FILE)?)
        } else {
            None
        };

        activate_logging(&self.provider, self.logging)?;

        let symbols = self.provider.get_list(SYMBOL_ARRAY)?;
        if symbols.is_empty() {
            return Err(ConfigError::no_symbols(SYMBOL_ARRAY));
        }
        debug!("交易品种: {:?}", symbols);

        let matching_multithreaded = self.provider.get_bool_or(
            CENTRAL_ORDER_BOOK_MULTITHREADED,
            DEFAULT_CENTRAL_ORDER_BOOK_MULTITHREADED,
        )?;

        // 单线程模式下不读取线程池键，缺失的键不能报错
        let thread_pool_parameters = if matching_multithreaded {
            self.read_thread_pool_parameters()?
        } else {
            ThreadPoolParameters::default()
        };

        let configuration = ResolvedConfiguration {
            single_instance_tcp_port,
            process_priority,
            offline_order_entry_file,
            symbols,
            matching_multithreaded,
            thread_pool_parameters,
        };

        info!(
            "服务器配置解析完成: 端口={}, 品种数={}, 多线程撮合={}",
            configuration.single_instance_tcp_port(),
            configuration.symbols().len(),
            configuration.is_matching_multithreaded()
        );
        Ok(configuration)
    }

    fn read_port(&self) -> ConfigResult<u16> {
        let raw = self
            .provider
            .get_int_or(SINGLE_INSTANCE_TCP_PORT, DEFAULT_SINGLE_INSTANCE_TCP_PORT)?;
        u16::try_from(raw).map_err(|_| {
            ConfigError::malformed(
                SINGLE_INSTANCE_TCP_PORT,
                format!("端口超出范围 0..=65535: {raw}"),
            )
        })
    }

    fn read_thread_pool_parameters(&self) -> ConfigResult<ThreadPoolParameters> {
        let pin_threads_to_cores = self.provider.get_bool_or(
            CENTRAL_ORDER_BOOK_PIN_THREADS_TO_CORES,
            DEFAULT_PIN_THREADS_TO_CORES,
        )?;
        let hyper_threading = self
            .provider
            .get_bool_or(CENTRAL_ORDER_BOOK_HYPER_THREADING, DEFAULT_HYPER_THREADING)?;
        let work_queue_size_per_thread = self.read_size(
            CENTRAL_ORDER_BOOK_WORK_QUEUE_SIZE_PER_THREAD,
            DEFAULT_WORK_QUEUE_SIZE_PER_THREAD,
        )?;
        let thread_stack_size =
            self.read_size(CENTRAL_ORDER_BOOK_THREAD_STACK_SIZE, DEFAULT_THREAD_STACK_SIZE)?;

        let priority_name = self
            .provider
            .get_string_or(CENTRAL_ORDER_BOOK_THREAD_PRIORITY, DEFAULT_THREAD_PRIORITY)?;
        let thread_priority = priority_name
            .parse::<ThreadPriority>()
            .map_err(|e| ConfigError::malformed(CENTRAL_ORDER_BOOK_THREAD_PRIORITY, e.to_string()))?;

        let parameters = ThreadPoolParameters {
            pin_threads_to_cores,
            hyper_threading,
            work_queue_size_per_thread,
            thread_stack_size,
            thread_priority,
        };
        debug!("线程池参数: {:?}", parameters);
        Ok(parameters)
    }

    fn read_size(&self, key: &str, default: usize) -> ConfigResult<usize> {
        if !self.provider.has(key) {
            return Ok(default);
        }
        let raw = self.provider.get_int(key)?;
        usize::try_from(raw)
            .map_err(|_| ConfigError::malformed(key, format!("不能为负数: {raw}")))
    }
}
