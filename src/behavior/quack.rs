//! 叫声行为组件

use crate::behavior::QuackBehavior;
use crate::DuckResult;
use std::io::Write;

/// 呱呱叫
#[derive(Debug, Default, Clone, Copy)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "gua gua !")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "quack"
    }
}

/// 吱吱叫（橡皮鸭）
#[derive(Debug, Default, Clone, Copy)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out, "zhi zhi !")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "squeak"
    }
}

/// 不出声，只输出一个空行
#[derive(Debug, Default, Clone, Copy)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self, out: &mut dyn Write) -> DuckResult<()> {
        writeln!(out)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "mute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_quack_messages() {
        let mut buf = Vec::new();
        Quack.quack(&mut buf).unwrap();
        Squeak.quack(&mut buf).unwrap();
        MuteQuack.quack(&mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "gua gua !\nzhi zhi !\n\n");
    }
}
