//! Madrasa 管理后台服务
//!
//! 基于 Actix Web 的学校管理接口：通用数据表格、实体表单生命周期与模拟数据服务。
//!
//! # 架构
//! - `cache`: 会话缓存（Moka）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `form`: 表单会话与字段校验
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存模拟）
//! - `table`: 通用数据表格
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod table;
pub mod utils;
