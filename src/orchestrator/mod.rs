//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_accumulator` - 结果累加器
//! - 逐行读取输入（`BufRead`）
//! - 调用 services 完成解析、展开
//! - 跳过坏行，控制批次上限
//!
//! ### `reporter` - 上报流程
//! - 持有配置和注入的平台客户端
//! - 创建运行 → 提交结果 → 结束运行
//! - 构建最终输出
//!
//! ## 层次关系
//!
//! ```text
//! reporter (App)
//!     ↓
//! batch_accumulator (处理 Vec<Line>)
//!     ↓
//! services (能力层：case_id / line_parser / result_projector / report_builder)
//!     ↓
//! clients (外部系统：TestOpsApi / QaseClient)
//! ```

pub mod batch_accumulator;
pub mod reporter;

// 重新导出主要类型
pub use batch_accumulator::{AccumulatorStats, BatchAccumulator, BatchOutcome};
pub use reporter::App;
