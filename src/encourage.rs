//! 爸爸/妈妈鼓励语

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机源。抽象出来以便测试时固定结果。
pub trait RandomSource {
    /// 以概率 `probability` 返回 true
    fn roll(&mut self, probability: f64) -> bool;
    /// 在 `0..len` 中均匀选一个下标，`len` 必须大于 0
    fn pick(&mut self, len: usize) -> usize;
}

/// 基于 `StdRng` 的随机源
pub struct Dice(StdRng);

impl Dice {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for Dice {
    fn roll(&mut self, probability: f64) -> bool {
        self.0.random_bool(probability.clamp(0.0, 1.0))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// 鼓励语的发送者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Dad,
    Mom,
}

const DAD_MESSAGES: [&str; 4] = ["咪猪头真棒！", "大猪头爸爸为你骄傲！", "继续加油！", "太厉害了！"];

const MOM_MESSAGES: [&str; 4] = [
    "宝贝太聪明了！",
    "蜂蜜小黄鱼妈妈给你比心 ❤️",
    "读得真好听！",
    "哇，全对！",
];

impl Persona {
    pub fn messages(self) -> &'static [&'static str] {
        match self {
            Persona::Dad => &DAD_MESSAGES,
            Persona::Mom => &MOM_MESSAGES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Persona::Dad => "👨 爸爸",
            Persona::Mom => "👩 妈妈",
        }
    }
}

/// 一条正在显示的鼓励语
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encouragement {
    pub persona: Persona,
    pub message: &'static str,
}

/// 先五五开选爸爸或妈妈，再从其语录中均匀抽一条
pub fn choose(rng: &mut dyn RandomSource) -> Encouragement {
    let persona = if rng.roll(0.5) {
        Persona::Dad
    } else {
        Persona::Mom
    };
    let pool = persona.messages();
    Encouragement {
        persona,
        message: pool[rng.pick(pool.len())],
    }
}
