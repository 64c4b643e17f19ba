//! 飞行行为组件

use crate::behavior::FlyBehavior;
use crate::DuckResult;
use std::io::Write;

/// 用翅膀飞
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "I can fly with my wings !")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "with_wings"
    }
}

/// 不会飞
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "I can not fly !")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "no_way"
    }
}

/// 火箭动力
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "I can fly with a rocket !")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "rocket_powered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fly_output(behavior: &dyn FlyBehavior) -> String {
        let mut buf = Vec::new();
        behavior.fly(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_builtin_fly_messages() {
        assert_eq!(fly_output(&FlyWithWings), "I can fly with my wings !\n");
        assert_eq!(fly_output(&FlyNoWay), "I can not fly !\n");
        assert_eq!(fly_output(&FlyRocketPowered), "I can fly with a rocket !\n");
    }
}
