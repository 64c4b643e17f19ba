//! 可跨线程共享的鸭子
//!
//! 每个槽位按单写者/单读者寄存器处理：替换和执行都经过同一把锁，
//! 不会观察到替换了一半的策略。

use crate::behavior::{Slot, Strategy};
use crate::duck::Duck;
use crate::DuckResult;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

/// 共享句柄，克隆后指向同一只鸭子
#[derive(Debug, Clone)]
pub struct SharedDuck {
    inner: Arc<RwLock<Duck>>,
}

impl SharedDuck {
    pub fn new(duck: Duck) -> Self {
        Self {
            inner: Arc::new(RwLock::new(duck)),
        }
    }

    pub fn perform(&self, slot: Slot, out: &mut dyn Write) -> DuckResult<()> {
        self.inner.read().perform(slot, out)
    }

    pub fn set_strategy(&self, slot: Slot, strategy: Strategy) -> DuckResult<()> {
        self.inner.write().set_strategy(slot, strategy)
    }

    pub fn display(&self, out: &mut dyn Write) -> DuckResult<()> {
        self.inner.read().display(out)
    }

    /// 当前各槽位策略名称，按 `Slot::ALL` 顺序
    pub fn snapshot_names(&self) -> Vec<String> {
        let duck = self.inner.read();
        Slot::ALL
            .iter()
            .map(|slot| duck.strategy(*slot).name().to_string())
            .collect()
    }

    /// 在锁内访问鸭子
    pub fn with_duck<R>(&self, f: impl FnOnce(&Duck) -> R) -> R {
        f(&self.inner.read())
    }
}
