//! 工具函数模块
//!
//! 此模块包含对象键的拼接与校验工具。

pub mod path;
