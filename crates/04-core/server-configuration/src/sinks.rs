//! 日志输出端激活

use crate::constants::LOGGER_BUFFER_SIZE;
use config_abstractions::{KeyValueProvider, LoggerSink, LoggingActivator};
use infrastructure_common::{ConfigError, ConfigResult};
use tracing::debug;

/// 根据配置初始化日志器并激活输出端
///
/// `LOGGER_BUFFER_SIZE` 必须存在。随后按注册表顺序检查每个输出端：
/// 只有 `LOGGER_<SINK>` 存在且为 `true` 时才启用该输出端，
/// 并在 `LOGGER_<SINK>_RESOURCE_NAME` 存在时设置资源名。
/// 未启用的输出端即使配置了资源名也不会被触及。
pub fn activate_logging<P>(provider: &P, logging: &dyn LoggingActivator) -> ConfigResult<()>
where
    P: KeyValueProvider + ?Sized,
{
    let raw_buffer_size = provider.get_int(LOGGER_BUFFER_SIZE)?;
    let buffer_size = usize::try_from(raw_buffer_size).map_err(|_| {
        ConfigError::malformed(
            LOGGER_BUFFER_SIZE,
            format!("缓冲区大小不能为负数: {raw_buffer_size}"),
        )
    })?;
    logging.initialise(buffer_size);

    for sink in LoggerSink::ALL {
        let enable_key = sink.enable_key();
        if !provider.has(&enable_key) || !provider.get_bool(&enable_key)? {
            continue;
        }

        logging.enable_sink(sink);

        let resource_key = sink.resource_name_key();
        if provider.has(&resource_key) {
            let resource_name = provider.get_string(&resource_key)?;
            logging.set_sink_resource_name(sink, &resource_name);
        } else {
            debug!("日志输出端 {} 未配置资源名", sink);
        }
    }

    Ok(())
}
