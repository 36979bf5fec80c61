//! 配置键与内置默认值
//!
//! 键名是配置文件格式的一部分，修改会破坏已有的部署配置。

/// 单实例 TCP 端口
pub const SINGLE_INSTANCE_TCP_PORT: &str = "SINGLE_INSTANCE_TCP_PORT";
/// 进程优先级
pub const PROCESS_PRIORITY: &str = "PROCESS_PRIORITY";
/// 离线委托文件
pub const OFFLINE_ORDER_ENTRY_FILE: &str = "OFFLINE_ORDER_ENTRY_FILE";
/// 日志缓冲区大小
pub const LOGGER_BUFFER_SIZE: &str = "LOGGER_BUFFER_SIZE";
/// 交易品种列表
pub const SYMBOL_ARRAY: &str = "SYMBOL_ARRAY";
/// 多线程撮合开关
pub const CENTRAL_ORDER_BOOK_MULTITHREADED: &str = "CENTRAL_ORDER_BOOK_MULTITHREADED";
/// 工作线程绑核
pub const CENTRAL_ORDER_BOOK_PIN_THREADS_TO_CORES: &str = "CENTRAL_ORDER_BOOK_PIN_THREADS_TO_CORES";
/// 使用超线程
pub const CENTRAL_ORDER_BOOK_HYPER_THREADING: &str = "CENTRAL_ORDER_BOOK_HYPER_THREADING";
/// 每个工作线程的队列长度
pub const CENTRAL_ORDER_BOOK_WORK_QUEUE_SIZE_PER_THREAD: &str =
    "CENTRAL_ORDER_BOOK_WORK_QUEUE_SIZE_PER_THREAD";
/// 工作线程栈大小
pub const CENTRAL_ORDER_BOOK_THREAD_STACK_SIZE: &str = "CENTRAL_ORDER_BOOK_THREAD_STACK_SIZE";
/// 工作线程优先级
pub const CENTRAL_ORDER_BOOK_THREAD_PRIORITY: &str = "CENTRAL_ORDER_BOOK_THREAD_PRIORITY";

/// 默认单实例 TCP 端口
pub const DEFAULT_SINGLE_INSTANCE_TCP_PORT: i64 = 666;
/// 默认进程优先级
pub const DEFAULT_PROCESS_PRIORITY: &str = "NORMAL";
/// 默认启用多线程撮合
pub const DEFAULT_CENTRAL_ORDER_BOOK_MULTITHREADED: bool = true;
/// 默认绑核
pub const DEFAULT_PIN_THREADS_TO_CORES: bool = true;
/// 默认不使用超线程
pub const DEFAULT_HYPER_THREADING: bool = false;
/// 默认每线程队列长度
pub const DEFAULT_WORK_QUEUE_SIZE_PER_THREAD: usize = 128;
/// 默认栈大小，0 表示使用平台默认值
pub const DEFAULT_THREAD_STACK_SIZE: usize = 0;
/// 默认线程优先级
pub const DEFAULT_THREAD_PRIORITY: &str = "NORMAL";
