//! App 状态定义 (Model)
//!
//! 包含应用状态结构体、导航状态及相关枚举

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::actions::Action;
use crate::config::{AppConfig, SpeechConfig, TimingConfig};
use crate::encourage::{Persona, RandomSource};
use crate::highlight::{Segment, highlight};
use crate::models::{Category, Deck, Item};
use crate::speech::SpeechEngine;
use crate::timers::Scheduler;

/// 当前页面，同一时刻只有一个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Grid,
    Detail,
}

/// 导航状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    pub category: Option<Category>,
    pub index: usize,
    /// 选择分类时拷贝的卡片列表
    pub list: Vec<Item>,
}

impl Navigation {
    /// 选择分类：替换列表，下标归零
    pub fn select_category(&mut self, category: Category, deck: &Deck) {
        self.category = Some(category);
        self.list = deck.items(category).to_vec();
        self.index = 0;
    }

    /// 选中某张卡片，下标越界时不变并返回 false
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.list.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// 下一张，到末尾回到开头；列表为空返回 false
    pub fn advance(&mut self) -> bool {
        if self.list.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.list.len();
        true
    }

    /// 上一张，到开头绕到末尾；列表为空返回 false
    pub fn retreat(&mut self) -> bool {
        if self.list.is_empty() {
            return false;
        }
        self.index = if self.index == 0 {
            self.list.len() - 1
        } else {
            self.index - 1
        };
        true
    }

    pub fn current(&self) -> Option<&Item> {
        self.list.get(self.index)
    }
}

/// 详情页卡片内容
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub symbol: String,
    pub emoji: String,
    pub word: Vec<Segment>,
}

impl DetailCard {
    pub fn from_item(item: &Item) -> Self {
        Self {
            symbol: item.char.clone(),
            emoji: item.emoji.clone(),
            word: highlight(&item.word, &item.char),
        }
    }
}

/// 卡片弹出动画。每次更新卡片都重新开始，即使是同一张卡片。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardAnimation {
    pub generation: u64,
    pub started_at: Option<Instant>,
}

impl CardAnimation {
    pub fn restart(&mut self, now: Instant) {
        self.generation = self.generation.wrapping_add(1);
        self.started_at = Some(now);
    }

    /// 动画进度 0.0..=1.0，未开始视为已完成
    pub fn progress(&self, now: Instant, duration: Duration) -> f32 {
        match self.started_at {
            Some(start) if !duration.is_zero() => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }
}

/// 人物气泡。爸爸和妈妈各有一个，互不影响。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bubble {
    pub message: Option<&'static str>,
    pub bouncing: bool,
}

/// 鼠标可点击区域，由视图在每帧渲染时填充
#[derive(Debug, Clone, PartialEq)]
pub struct Hitbox {
    pub area: Rect,
    pub action: Action,
}

/// 应用状态
pub struct App {
    pub deck: Deck,
    pub nav: Navigation,
    pub view: View,

    pub home_cursor: usize,
    pub grid_cursor: usize,
    /// 网格列数，由视图按终端宽度计算
    pub grid_columns: usize,
    pub grid_shown_at: Option<Instant>,
    pub hitboxes: Vec<Hitbox>,

    pub card: Option<DetailCard>,
    pub card_anim: CardAnimation,
    pub pulsing: bool,

    pub dad: Bubble,
    pub mom: Bubble,

    pub timers: Scheduler,
    pub timing: TimingConfig,
    pub speech_config: SpeechConfig,
    pub(super) speech: Box<dyn SpeechEngine>,
    pub(super) rng: Box<dyn RandomSource>,
}

impl App {
    /// 创建新的应用实例，初始停在首页
    pub fn new(
        deck: Deck,
        config: &AppConfig,
        speech: Box<dyn SpeechEngine>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            deck,
            nav: Navigation::default(),
            view: View::Home,
            home_cursor: 0,
            grid_cursor: 0,
            grid_columns: 1,
            grid_shown_at: None,
            hitboxes: Vec::new(),
            card: None,
            card_anim: CardAnimation::default(),
            pulsing: false,
            dad: Bubble::default(),
            mom: Bubble::default(),
            timers: Scheduler::new(),
            timing: config.timing.clone(),
            speech_config: config.speech.clone(),
            speech,
            rng,
        }
    }

    pub fn bubble(&self, persona: Persona) -> &Bubble {
        match persona {
            Persona::Dad => &self.dad,
            Persona::Mom => &self.mom,
        }
    }

    pub fn bubble_mut(&mut self, persona: Persona) -> &mut Bubble {
        match persona {
            Persona::Dad => &mut self.dad,
            Persona::Mom => &mut self.mom,
        }
    }

    /// 网格中第 `index` 个方块是否已经入场（按列表顺序错开）
    pub fn tile_visible(&self, index: usize, now: Instant) -> bool {
        match self.grid_shown_at {
            Some(shown) => {
                let delay = self.timing.tile_stagger() * u32::try_from(index).unwrap_or(u32::MAX);
                now.saturating_duration_since(shown) >= delay
            }
            None => true,
        }
    }

    /// 点击位置对应的操作
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        self.hitboxes
            .iter()
            .find(|h| {
                column >= h.area.x
                    && column < h.area.x.saturating_add(h.area.width)
                    && row >= h.area.y
                    && row < h.area.y.saturating_add(h.area.height)
            })
            .map(|h| h.action.clone())
    }
}
