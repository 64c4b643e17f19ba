//! 内置策略目录
//!
//! 按名称查找内置策略，配置文件通过这里把字符串解析为行为组件。

use crate::behavior::{
    FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior,
    Squeak, Strategy,
};
use std::sync::Arc;

/// 内置飞行策略名称
pub const FLY_BEHAVIOR_NAMES: [&str; 3] = ["with_wings", "no_way", "rocket_powered"];

/// 内置叫声策略名称
pub const QUACK_BEHAVIOR_NAMES: [&str; 3] = ["quack", "squeak", "mute"];

/// 按名称查找内置飞行策略
pub fn fly_behavior_by_name(name: &str) -> Option<Arc<dyn FlyBehavior>> {
    let behavior: Arc<dyn FlyBehavior> = match name {
        "with_wings" => Arc::new(FlyWithWings),
        "no_way" => Arc::new(FlyNoWay),
        "rocket_powered" => Arc::new(FlyRocketPowered),
        _ => return None,
    };
    Some(behavior)
}

/// 按名称查找内置叫声策略
pub fn quack_behavior_by_name(name: &str) -> Option<Arc<dyn QuackBehavior>> {
    let behavior: Arc<dyn QuackBehavior> = match name {
        "quack" => Arc::new(Quack),
        "squeak" => Arc::new(Squeak),
        "mute" => Arc::new(MuteQuack),
        _ => return None,
    };
    Some(behavior)
}

/// 在所有槽位中按名称查找
pub fn strategy_by_name(name: &str) -> Option<Strategy> {
    fly_behavior_by_name(name)
        .map(Strategy::Fly)
        .or_else(|| quack_behavior_by_name(name).map(Strategy::Quack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Slot;

    #[test]
    fn test_catalog_names_round_trip() {
        for name in FLY_BEHAVIOR_NAMES {
            assert_eq!(fly_behavior_by_name(name).unwrap().name(), name);
        }
        for name in QUACK_BEHAVIOR_NAMES {
            assert_eq!(quack_behavior_by_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_strategy_by_name_picks_slot() {
        assert_eq!(strategy_by_name("rocket_powered").unwrap().slot(), Slot::Fly);
        assert_eq!(strategy_by_name("squeak").unwrap().slot(), Slot::Quack);
        assert!(strategy_by_name("honk").is_none());
        assert!(fly_behavior_by_name("quack").is_none());
    }
}
