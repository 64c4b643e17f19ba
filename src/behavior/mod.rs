//! 行为组件（策略）
//!
//! 每种能力只有一个动作：`FlyBehavior::fly` 和 `QuackBehavior::quack`。
//! 宿主只持有 `Arc<dyn …>`，运行时可随时替换。

pub mod catalog;
pub mod fly;
pub mod quack;

use crate::{DuckError, DuckResult};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

pub use catalog::*;
pub use fly::*;
pub use quack::*;

/// 飞行能力
pub trait FlyBehavior: Send + Sync {
    /// 执行飞行动作，把可观察的结果写入 `out`
    fn fly(&self, out: &mut dyn Write) -> DuckResult<()>;

    /// 策略名称，用于目录查找和日志
    fn name(&self) -> &str;
}

/// 叫声能力
pub trait QuackBehavior: Send + Sync {
    /// 执行叫声动作，把可观察的结果写入 `out`
    fn quack(&self, out: &mut dyn Write) -> DuckResult<()>;

    /// 策略名称，用于目录查找和日志
    fn name(&self) -> &str;
}

// === 函数式行为包装器 ===

/// 将函数包装为 FlyBehavior
pub struct FnFlyBehavior<F> {
    pub name: String,
    pub func: F,
}

impl<F> FnFlyBehavior<F>
where
    F: Fn(&mut dyn Write) -> DuckResult<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> FlyBehavior for FnFlyBehavior<F>
where
    F: Fn(&mut dyn Write) -> DuckResult<()> + Send + Sync,
{
    fn fly(&self, out: &mut dyn Write) -> DuckResult<()> {
        (self.func)(out)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 将函数包装为 QuackBehavior
pub struct FnQuackBehavior<F> {
    pub name: String,
    pub func: F,
}

impl<F> FnQuackBehavior<F>
where
    F: Fn(&mut dyn Write) -> DuckResult<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> QuackBehavior for FnQuackBehavior<F>
where
    F: Fn(&mut dyn Write) -> DuckResult<()> + Send + Sync,
{
    fn quack(&self, out: &mut dyn Write) -> DuckResult<()> {
        (self.func)(out)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// === 类型转换辅助工具 ===

/// 将任何实现了 FlyBehavior 的类型转换为 Arc<dyn FlyBehavior>
pub fn fly_behavior<T: FlyBehavior + 'static>(behavior: T) -> Arc<dyn FlyBehavior> {
    Arc::new(behavior)
}

/// 将任何实现了 QuackBehavior 的类型转换为 Arc<dyn QuackBehavior>
pub fn quack_behavior<T: QuackBehavior + 'static>(behavior: T) -> Arc<dyn QuackBehavior> {
    Arc::new(behavior)
}

// === 槽位与动态策略 ===

/// 宿主上的行为槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Fly,
    Quack,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Fly, Slot::Quack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Fly => "fly",
            Slot::Quack => "quack",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fly" => Ok(Slot::Fly),
            "quack" => Ok(Slot::Quack),
            other => Err(DuckError::UnknownSlot(other.to_string())),
        }
    }
}

/// 按槽位打标签的策略，供按名称操作的接口使用
#[derive(Clone)]
pub enum Strategy {
    Fly(Arc<dyn FlyBehavior>),
    Quack(Arc<dyn QuackBehavior>),
}

impl Strategy {
    pub fn fly<T: FlyBehavior + 'static>(behavior: T) -> Self {
        Strategy::Fly(Arc::new(behavior))
    }

    pub fn quack<T: QuackBehavior + 'static>(behavior: T) -> Self {
        Strategy::Quack(Arc::new(behavior))
    }

    /// 该策略能够填充的槽位
    pub fn slot(&self) -> Slot {
        match self {
            Strategy::Fly(_) => Slot::Fly,
            Strategy::Quack(_) => Slot::Quack,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Strategy::Fly(b) => b.name(),
            Strategy::Quack(b) => b.name(),
        }
    }

    /// 执行策略的唯一动作
    pub fn perform(&self, out: &mut dyn Write) -> DuckResult<()> {
        match self {
            Strategy::Fly(b) => b.fly(out),
            Strategy::Quack(b) => b.quack(out),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strategy::{:?}({})", self.slot(), self.name())
    }
}

impl From<Arc<dyn FlyBehavior>> for Strategy {
    fn from(behavior: Arc<dyn FlyBehavior>) -> Self {
        Strategy::Fly(behavior)
    }
}

impl From<Arc<dyn QuackBehavior>> for Strategy {
    fn from(behavior: Arc<dyn QuackBehavior>) -> Self {
        Strategy::Quack(behavior)
    }
}

// === 便利宏 ===

/// 创建函数式 FlyBehavior 的便利宏
#[macro_export]
macro_rules! fly_fn {
    ($name:expr, $func:expr) => {
        $crate::behavior::fly_behavior($crate::behavior::FnFlyBehavior::new($name, $func))
    };
}

/// 创建函数式 QuackBehavior 的便利宏
#[macro_export]
macro_rules! quack_fn {
    ($name:expr, $func:expr) => {
        $crate::behavior::quack_behavior($crate::behavior::FnQuackBehavior::new($name, $func))
    };
}
