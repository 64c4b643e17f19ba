//! 组合式鸭子
//!
//! 用组合代替继承：只有一个具体的 `Duck` 类型，种类由 `DuckKind` 标记，
//! 飞行和叫声委托给槽位中当前安装的策略。

pub mod builder;
pub mod shared;

use crate::behavior::{
    FlyBehavior, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackBehavior, Slot, Strategy,
};
use crate::{DuckError, DuckResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub use builder::*;
pub use shared::*;

/// 鸭子的种类，决定身份展示和默认策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckKind {
    Mallard,
    Model,
}

impl DuckKind {
    /// 该种类的身份描述
    pub fn identity(&self) -> &'static str {
        match self {
            DuckKind::Mallard => "I am mallard duck !",
            DuckKind::Model => "I am model duck !",
        }
    }

    pub fn default_fly(&self) -> Arc<dyn FlyBehavior> {
        match self {
            DuckKind::Mallard => Arc::new(FlyWithWings),
            DuckKind::Model => Arc::new(FlyNoWay),
        }
    }

    pub fn default_quack(&self) -> Arc<dyn QuackBehavior> {
        match self {
            DuckKind::Mallard => Arc::new(Quack),
            DuckKind::Model => Arc::new(MuteQuack),
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuckKind::Mallard => write!(f, "mallard"),
            DuckKind::Model => write!(f, "model"),
        }
    }
}

/// 所有鸭子都会游泳，不参与策略替换
pub fn swim(out: &mut dyn Write) -> DuckResult<()> {
    writeln!(out, "all ducks can swim !")?;
    Ok(())
}

/// 组合式鸭子 - 行为通过槽位中的策略组件提供
pub struct Duck {
    id: Uuid,
    kind: DuckKind,
    /// 飞行槽位
    fly_behavior: Arc<dyn FlyBehavior>,
    /// 叫声槽位
    quack_behavior: Arc<dyn QuackBehavior>,
}

impl Duck {
    /// 使用给定策略创建鸭子
    pub fn new(
        kind: DuckKind,
        fly_behavior: Arc<dyn FlyBehavior>,
        quack_behavior: Arc<dyn QuackBehavior>,
    ) -> Self {
        let duck = Self {
            id: Uuid::new_v4(),
            kind,
            fly_behavior,
            quack_behavior,
        };
        info!(
            duck = %duck.id,
            kind = %kind,
            fly = duck.fly_behavior.name(),
            quack = duck.quack_behavior.name(),
            "duck created"
        );
        duck
    }

    /// 使用该种类的默认策略创建鸭子
    pub fn of_kind(kind: DuckKind) -> Self {
        Self::new(kind, kind.default_fly(), kind.default_quack())
    }

    /// 绿头鸭：用翅膀飞，呱呱叫
    pub fn mallard() -> Self {
        Self::of_kind(DuckKind::Mallard)
    }

    /// 模型鸭：不会飞，不出声
    pub fn model() -> Self {
        Self::of_kind(DuckKind::Model)
    }

    /// 由一组带标签的策略创建鸭子，每个槽位必须恰好提供一次
    pub fn from_strategies(
        kind: DuckKind,
        strategies: impl IntoIterator<Item = Strategy>,
    ) -> DuckResult<Self> {
        let mut builder = DuckBuilder::new(kind);
        for strategy in strategies {
            if builder.has(strategy.slot()) {
                return Err(DuckError::InvalidConfiguration(format!(
                    "{} slot supplied more than once",
                    strategy.slot()
                )));
            }
            builder = builder.with_strategy(strategy);
        }
        builder.build_strict()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    /// 获取飞行策略的引用
    pub fn fly_behavior(&self) -> &dyn FlyBehavior {
        &*self.fly_behavior
    }

    /// 获取叫声策略的引用
    pub fn quack_behavior(&self) -> &dyn QuackBehavior {
        &*self.quack_behavior
    }

    /// 获取槽位中当前的策略
    pub fn strategy(&self, slot: Slot) -> Strategy {
        match slot {
            Slot::Fly => Strategy::Fly(Arc::clone(&self.fly_behavior)),
            Slot::Quack => Strategy::Quack(Arc::clone(&self.quack_behavior)),
        }
    }

    pub fn perform_fly(&self, out: &mut dyn Write) -> DuckResult<()> {
        debug!(duck = %self.id, behavior = self.fly_behavior.name(), "perform fly");
        self.fly_behavior.fly(out)
    }

    pub fn perform_quack(&self, out: &mut dyn Write) -> DuckResult<()> {
        debug!(duck = %self.id, behavior = self.quack_behavior.name(), "perform quack");
        self.quack_behavior.quack(out)
    }

    /// 按槽位执行当前安装的策略
    pub fn perform(&self, slot: Slot, out: &mut dyn Write) -> DuckResult<()> {
        match slot {
            Slot::Fly => self.perform_fly(out),
            Slot::Quack => self.perform_quack(out),
        }
    }

    /// 替换飞行策略，对之后的调用立即生效
    pub fn set_fly_behavior(&mut self, fly_behavior: Arc<dyn FlyBehavior>) {
        info!(
            duck = %self.id,
            from = self.fly_behavior.name(),
            to = fly_behavior.name(),
            "fly behavior replaced"
        );
        self.fly_behavior = fly_behavior;
    }

    /// 替换叫声策略，对之后的调用立即生效
    pub fn set_quack_behavior(&mut self, quack_behavior: Arc<dyn QuackBehavior>) {
        info!(
            duck = %self.id,
            from = self.quack_behavior.name(),
            to = quack_behavior.name(),
            "quack behavior replaced"
        );
        self.quack_behavior = quack_behavior;
    }

    /// 按槽位替换策略；策略与槽位不匹配时返回错误，原策略保持不变
    pub fn set_strategy(&mut self, slot: Slot, strategy: Strategy) -> DuckResult<()> {
        match (slot, strategy) {
            (Slot::Fly, Strategy::Fly(b)) => self.set_fly_behavior(b),
            (Slot::Quack, Strategy::Quack(b)) => self.set_quack_behavior(b),
            (slot, offered) => {
                return Err(DuckError::CapabilityMismatch {
                    slot,
                    offered: offered.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// 展示身份，每个种类各不相同
    pub fn display(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "{}", self.kind.identity())?;
        Ok(())
    }

    pub fn swim(&self, out: &mut dyn Write) -> DuckResult<()> {
        swim(out)
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("fly_behavior", &self.fly_behavior.name())
            .field("quack_behavior", &self.quack_behavior.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{FlyRocketPowered, Squeak};

    fn output(f: impl FnOnce(&mut Vec<u8>) -> DuckResult<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_kind_defaults() {
        let mallard = Duck::mallard();
        assert_eq!(mallard.fly_behavior().name(), "with_wings");
        assert_eq!(mallard.quack_behavior().name(), "quack");

        let model = Duck::model();
        assert_eq!(model.fly_behavior().name(), "no_way");
        assert_eq!(model.quack_behavior().name(), "mute");
    }

    #[test]
    fn test_display_is_per_kind() {
        assert_eq!(output(|b| Duck::mallard().display(b)), "I am mallard duck !\n");
        assert_eq!(output(|b| Duck::model().display(b)), "I am model duck !\n");
    }

    #[test]
    fn test_swim_is_shared() {
        let expected = "all ducks can swim !\n";
        assert_eq!(output(|b| Duck::mallard().swim(b)), expected);
        assert_eq!(output(|b| Duck::model().swim(b)), expected);
        assert_eq!(output(|b| swim(b)), expected);
    }

    #[test]
    fn test_set_strategy_mismatch_keeps_previous() {
        let mut duck = Duck::mallard();

        let err = duck
            .set_strategy(Slot::Fly, Strategy::quack(Squeak))
            .unwrap_err();
        assert!(matches!(
            err,
            DuckError::CapabilityMismatch { slot: Slot::Fly, ref offered } if offered == "squeak"
        ));
        assert_eq!(duck.fly_behavior().name(), "with_wings");
        assert_eq!(duck.quack_behavior().name(), "quack");

        duck.set_strategy(Slot::Fly, Strategy::fly(FlyRocketPowered))
            .unwrap();
        assert_eq!(output(|b| duck.perform(Slot::Fly, b)), "I can fly with a rocket !\n");
    }

    #[test]
    fn test_from_strategies_validates_slots() {
        let duck = Duck::from_strategies(
            DuckKind::Model,
            [Strategy::quack(Squeak), Strategy::fly(FlyRocketPowered)],
        )
        .unwrap();
        assert_eq!(duck.kind(), DuckKind::Model);
        assert_eq!(duck.strategy(Slot::Quack).name(), "squeak");

        let missing = Duck::from_strategies(DuckKind::Mallard, [Strategy::fly(FlyNoWay)]);
        assert!(matches!(missing, Err(DuckError::InvalidConfiguration(_))));

        let twice = Duck::from_strategies(
            DuckKind::Mallard,
            [
                Strategy::fly(FlyNoWay),
                Strategy::fly(FlyWithWings),
                Strategy::quack(Quack),
            ],
        );
        assert!(matches!(twice, Err(DuckError::InvalidConfiguration(_))));
    }
}
