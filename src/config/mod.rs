//! 配置管理
//!
//! 默认配置文件、环境配置文件与环境变量分层加载。

mod r#impl;
mod structs;

pub use structs::*;
