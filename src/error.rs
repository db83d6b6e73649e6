use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 单行解析错误
    #[error("行解析错误: {0}")]
    Line(#[from] LineError),
    /// 输入流 / 批次错误
    #[error("处理错误: {0}")]
    Pipeline(#[from] PipelineError),
    /// 远程 API 错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 单行解析错误
///
/// 全部属于"坏行"，由 BatchAccumulator 跳过，不会中断整个流程
#[derive(Debug, Error)]
pub enum LineError {
    /// 不是合法的 JSON 对象，或字段类型不符
    #[error("JSON 解析失败: {0}")]
    Decode(#[from] serde_json::Error),
    /// 合法 JSON 但不是对象
    #[error("JSON 行不是对象")]
    NotAnObject,
    /// 时间戳不是 RFC3339 格式
    #[error("时间解析失败 ({value}): {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },
    /// 缺少测试名称
    #[error("行中没有测试名称")]
    MissingTest,
    /// action 既不是 pass 也不是 fail
    #[error("未知的 action: {0:?}")]
    UnknownAction(String),
    /// elapsed 为负数
    #[error("elapsed 不能为负数: {0}")]
    NegativeElapsed(f64),
    /// 用例 ID 超出 u64 范围
    #[error("无法解析 Qase ID: QASE-{0}")]
    CaseIdOutOfRange(String),
}

impl LineError {
    /// 是否属于解码错误（JSON / 时间戳）
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            LineError::Decode(_) | LineError::NotAnObject | LineError::InvalidTime { .. }
        )
    }

    /// 是否属于校验错误（必填字段 / 取值范围）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LineError::MissingTest | LineError::UnknownAction(_) | LineError::NegativeElapsed(_)
        )
    }
}

/// 输入流与批次错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 打开输入文件失败
    #[error("无法打开文件 ({path}): {source}")]
    OpenFailed {
        path: String,
        source: std::io::Error,
    },
    /// 读取输入失败
    #[error("读取文件失败 (第 {line} 行): {source}")]
    ReadFailed {
        line: usize,
        source: std::io::Error,
    },
    /// 达到单次批量提交上限
    #[error("已达到批量提交上限 {limit}，当前累计 {count} 条结果")]
    CapacityExceeded { count: usize, limit: usize },
}

/// 远程 API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        source: reqwest::Error,
    },
    /// HTTP 状态码不是 2xx
    #[error("API返回错误状态 ({endpoint}): {status} {body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应体中 status 为 false
    #[error("API返回失败 ({endpoint}): status=false")]
    Unsuccessful { endpoint: String },
    /// 响应体解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        source: reqwest::Error,
    },
    /// 构建 HTTP 客户端失败
    #[error("无法构建 HTTP 客户端: {0}")]
    ClientBuild(reqwest::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必填配置缺失
    #[error("缺少必填配置 {name} (命令行参数 {flag} 或环境变量 {env})")]
    Missing {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl ApiError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建响应解析错误
    pub fn json_parse_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::JsonParseFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
