//! 鸭子构建器
//!
//! 提供流式的鸭子构建接口

use crate::behavior::{FlyBehavior, QuackBehavior, Slot, Strategy};
use crate::duck::{Duck, DuckKind};
use crate::{DuckError, DuckResult};
use std::sync::Arc;

/// 鸭子构建器 - 提供流式 API 组装策略
pub struct DuckBuilder {
    kind: DuckKind,
    fly_behavior: Option<Arc<dyn FlyBehavior>>,
    quack_behavior: Option<Arc<dyn QuackBehavior>>,
}

impl DuckBuilder {
    pub fn new(kind: DuckKind) -> Self {
        Self {
            kind,
            fly_behavior: None,
            quack_behavior: None,
        }
    }

    /// 设置飞行策略
    pub fn with_fly<T: FlyBehavior + 'static>(mut self, behavior: T) -> Self {
        self.fly_behavior = Some(Arc::new(behavior));
        self
    }

    /// 设置飞行策略（Arc 版本）
    pub fn with_fly_arc(mut self, behavior: Arc<dyn FlyBehavior>) -> Self {
        self.fly_behavior = Some(behavior);
        self
    }

    /// 设置叫声策略
    pub fn with_quack<T: QuackBehavior + 'static>(mut self, behavior: T) -> Self {
        self.quack_behavior = Some(Arc::new(behavior));
        self
    }

    /// 设置叫声策略（Arc 版本）
    pub fn with_quack_arc(mut self, behavior: Arc<dyn QuackBehavior>) -> Self {
        self.quack_behavior = Some(behavior);
        self
    }

    /// 把带标签的策略放进它对应的槽位
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        match strategy {
            Strategy::Fly(b) => self.with_fly_arc(b),
            Strategy::Quack(b) => self.with_quack_arc(b),
        }
    }

    /// 槽位是否已经设置
    pub fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Fly => self.fly_behavior.is_some(),
            Slot::Quack => self.quack_behavior.is_some(),
        }
    }

    /// 构建鸭子，使用该种类的默认策略填充缺失的槽位
    pub fn build(self) -> Duck {
        let kind = self.kind;
        Duck::new(
            kind,
            self.fly_behavior.unwrap_or_else(|| kind.default_fly()),
            self.quack_behavior.unwrap_or_else(|| kind.default_quack()),
        )
    }

    /// 构建鸭子，如果有槽位缺失则返回错误
    pub fn build_strict(self) -> DuckResult<Duck> {
        Ok(Duck::new(
            self.kind,
            self.fly_behavior
                .ok_or_else(|| DuckError::missing_slot(Slot::Fly))?,
            self.quack_behavior
                .ok_or_else(|| DuckError::missing_slot(Slot::Quack))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{FlyRocketPowered, Squeak};

    #[test]
    fn test_build_fills_kind_defaults() {
        let duck = DuckBuilder::new(DuckKind::Model)
            .with_quack(Squeak)
            .build();

        assert_eq!(duck.fly_behavior().name(), "no_way");
        assert_eq!(duck.quack_behavior().name(), "squeak");
    }

    #[test]
    fn test_build_strict_requires_every_slot() {
        let err = DuckBuilder::new(DuckKind::Mallard)
            .with_fly(FlyRocketPowered)
            .build_strict()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: quack slot has no strategy"
        );

        let duck = DuckBuilder::new(DuckKind::Mallard)
            .with_strategy(Strategy::fly(FlyRocketPowered))
            .with_strategy(Strategy::quack(Squeak))
            .build_strict()
            .unwrap();
        assert_eq!(duck.fly_behavior().name(), "rocket_powered");
    }
}
