//! # Qase Test Reporter
//!
//! 解析 `go test -json` 输出，按测试名中的 `QASE-<id>` 标记汇总结果并上报到 Qase
//!
//! ## 架构设计
//!
//! ### ① 外部系统层（Clients）
//! - `clients/` - 与测试管理平台交互，只暴露能力
//! - `TestOpsApi` - 创建运行 / 批量提交 / 结束运行
//! - `QaseClient` - 基于 reqwest 的 Qase 实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，只处理单行 / 单条记录
//! - `extract_case_ids` - 提取用例 ID
//! - `parse_line` - 解析并校验一行
//! - `project_record` - 记录展开为结果
//! - `build_output` - 构建最终输出
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_accumulator` - 逐行累加，控制上限
//! - `orchestrator/reporter` - 上报流程，持有配置和注入的客户端
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod version;

// 重新导出常用类型
pub use clients::{QaseClient, ResultSubmission, TestOpsApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ReportOutput, ResultBatch, ResultEntry, ResultStatus, TestRecord};
pub use orchestrator::{App, BatchAccumulator, BatchOutcome};
