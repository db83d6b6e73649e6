use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 环境变量名（沿用 Qase 官方命名）
pub const ENV_PROJECT: &str = "QASE_TESTOPS_PROJECT";
pub const ENV_API_TOKEN: &str = "QASE_TESTOPS_API_TOKEN";
pub const ENV_RUN_TITLE: &str = "QASE_TESTOPS_RUN_TITLE";
pub const ENV_API_BASE_URL: &str = "QASE_TESTOPS_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "QASE_TESTOPS_TIMEOUT_SECS";
pub const ENV_VERBOSE_LOGGING: &str = "VERBOSE_LOGGING";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Qase 项目代码
    pub project: String,
    /// Qase API Token
    pub api_token: String,
    /// 测试运行标题
    pub run_title: String,
    /// Qase API 地址
    pub api_base_url: String,
    /// 单个 HTTP 请求超时（秒）
    pub timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: String::new(),
            api_token: String::new(),
            run_title: "Automated test run".to_string(),
            api_base_url: "https://api.qase.io/v1".to_string(),
            timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

/// 命令行覆盖项，`None` 表示未指定
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub project: Option<String>,
    pub api_token: Option<String>,
    pub run_title: Option<String>,
    pub api_base_url: Option<String>,
    pub verbose_logging: bool,
}

impl Config {
    /// 在默认值基础上读取环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 用环境变量覆盖当前配置
    ///
    /// `lookup` 便于测试时注入假环境
    pub fn with_env<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: ENV_TIMEOUT_SECS.to_string(),
                    value,
                    expected_type: "u64",
                })?,
            None => self.timeout_secs,
        };

        let verbose_logging = match lookup(ENV_VERBOSE_LOGGING) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: ENV_VERBOSE_LOGGING.to_string(),
                    value,
                    expected_type: "bool",
                })?,
            None => self.verbose_logging,
        };

        Ok(Self {
            project: lookup(ENV_PROJECT).unwrap_or(self.project),
            api_token: lookup(ENV_API_TOKEN).unwrap_or(self.api_token),
            run_title: lookup(ENV_RUN_TITLE).unwrap_or(self.run_title),
            api_base_url: lookup(ENV_API_BASE_URL).unwrap_or(self.api_base_url),
            timeout_secs,
            verbose_logging,
        })
    }

    /// 用命令行参数覆盖当前配置
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            project: overrides.project.unwrap_or(self.project),
            api_token: overrides.api_token.unwrap_or(self.api_token),
            run_title: overrides.run_title.unwrap_or(self.run_title),
            api_base_url: overrides.api_base_url.unwrap_or(self.api_base_url),
            timeout_secs: self.timeout_secs,
            verbose_logging: self.verbose_logging || overrides.verbose_logging,
        }
    }

    /// 校验必填项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.is_empty() {
            return Err(ConfigError::Missing {
                name: "project",
                flag: "--project",
                env: ENV_PROJECT,
            });
        }
        if self.api_token.is_empty() {
            return Err(ConfigError::Missing {
                name: "api_token",
                flag: "--api-token",
                env: ENV_API_TOKEN,
            });
        }
        Ok(())
    }
}
