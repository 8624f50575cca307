//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑、定时任务触发和各种页面切换方法

use std::time::Instant;

use tracing::{debug, info, warn};

use super::actions::{Action, CursorMove};
use super::state::{App, Bubble, DetailCard, View};
use crate::encourage;
use crate::models::Category;
use crate::speech;
use crate::timers::TimerKind;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        debug!(?action, view = ?self.view, "dispatch");
        match action {
            Action::Quit => return true,

            Action::SelectCategory(category) => self.show_category(category, now),
            Action::SelectItem(index) => self.show_detail(index, now),
            Action::GoHome => self.go_home(),
            Action::BackToGrid => self.back_to_grid(),

            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::Activate => self.activate(now),

            Action::NextCard => self.next_card(now),
            Action::PrevCard => self.prev_card(now),
            Action::Replay => self.play_audio(now),
        }
        false
    }

    /// 触发所有到期的定时任务
    pub fn tick(&mut self, now: Instant) {
        for kind in self.timers.take_due(now) {
            match kind {
                TimerKind::Autoplay => self.play_audio(now),
                TimerKind::CardPulse => self.pulsing = false,
                TimerKind::EncouragementBounce(persona) => {
                    self.bubble_mut(persona).bouncing = false;
                }
                TimerKind::EncouragementHide(persona) => {
                    *self.bubble_mut(persona) = Bubble::default();
                }
            }
        }
    }

    // ============ 页面切换 ============

    /// 切换页面，离开详情页时取消还没开始的自动朗读
    pub fn switch_view(&mut self, view: View) {
        if self.view == View::Detail && view != View::Detail {
            self.timers.cancel(TimerKind::Autoplay);
        }
        debug!(from = ?self.view, to = ?view, "switch view");
        self.view = view;
    }

    /// 进入分类网格
    pub fn show_category(&mut self, category: Category, now: Instant) {
        self.nav.select_category(category, &self.deck);
        self.grid_cursor = 0;
        self.grid_shown_at = Some(now);
        info!(%category, items = self.nav.list.len(), "category selected");

        self.switch_view(View::Grid);
        self.show_encouragement(now);
    }

    /// 打开第 `index` 张卡片，稍后自动朗读
    pub fn show_detail(&mut self, index: usize, now: Instant) {
        if !self.nav.select(index) {
            warn!(index, len = self.nav.list.len(), "ignoring out-of-range card");
            return;
        }
        self.grid_cursor = index;
        self.update_detail_card(now);
        self.switch_view(View::Detail);
        self.timers
            .schedule(TimerKind::Autoplay, self.timing.autoplay_delay(), now);
    }

    pub fn go_home(&mut self) {
        self.switch_view(View::Home);
    }

    pub fn back_to_grid(&mut self) {
        if !self.nav.list.is_empty() {
            self.grid_cursor = self.nav.index;
        }
        self.switch_view(View::Grid);
    }

    // ============ 详情页 ============

    /// 根据当前下标刷新卡片，并重新播放弹出动画
    pub fn update_detail_card(&mut self, now: Instant) {
        self.card = self.nav.current().map(DetailCard::from_item);
        if self.card.is_some() {
            self.card_anim.restart(now);
            debug!(index = self.nav.index, generation = self.card_anim.generation, "card updated");
        }
    }

    /// 朗读当前卡片，卡片短暂放大
    pub fn play_audio(&mut self, now: Instant) {
        let Some(item) = self.nav.current() else {
            return;
        };
        speech::play(self.speech.as_mut(), item, &self.speech_config);

        self.pulsing = true;
        self.timers
            .schedule(TimerKind::CardPulse, self.timing.pulse(), now);
    }

    /// 下一张；只有向后翻时才可能弹出鼓励语
    pub fn next_card(&mut self, now: Instant) {
        if !self.nav.advance() {
            return;
        }
        self.show_current_immediately(now);

        if self.rng.roll(self.timing.encouragement_chance) {
            self.show_encouragement(now);
        }
    }

    pub fn prev_card(&mut self, now: Instant) {
        if !self.nav.retreat() {
            return;
        }
        self.show_current_immediately(now);
    }

    fn show_current_immediately(&mut self, now: Instant) {
        self.timers.cancel(TimerKind::Autoplay);
        self.grid_cursor = self.nav.index;
        self.update_detail_card(now);
        self.play_audio(now);
    }

    // ============ 鼓励语 ============

    /// 随机选爸爸或妈妈说一句鼓励的话，弹跳一下，几秒后自动隐藏。
    /// 只替换同一人物的旧气泡和定时任务，另一人物的气泡照常显示。
    pub fn show_encouragement(&mut self, now: Instant) {
        let encouragement = encourage::choose(self.rng.as_mut());
        let persona = encouragement.persona;
        info!(?persona, message = encouragement.message, "encouragement");
        *self.bubble_mut(persona) = Bubble {
            message: Some(encouragement.message),
            bouncing: true,
        };

        self.timers.schedule(
            TimerKind::EncouragementBounce(persona),
            self.timing.bounce(),
            now,
        );
        self.timers.schedule(
            TimerKind::EncouragementHide(persona),
            self.timing.encouragement(),
            now,
        );
    }

    // ============ 光标 ============

    pub fn move_cursor(&mut self, direction: CursorMove) {
        match self.view {
            View::Home => {
                let last = Category::ALL.len() - 1;
                self.home_cursor = match direction {
                    CursorMove::Up | CursorMove::Left => self.home_cursor.saturating_sub(1),
                    CursorMove::Down | CursorMove::Right => (self.home_cursor + 1).min(last),
                };
            }
            View::Grid => {
                let len = self.nav.list.len();
                let columns = self.grid_columns.max(1);
                let cursor = self.grid_cursor;
                let target = match direction {
                    CursorMove::Left => cursor.checked_sub(1),
                    CursorMove::Right => Some(cursor + 1),
                    CursorMove::Up => cursor.checked_sub(columns),
                    CursorMove::Down => Some(cursor + columns),
                };
                if let Some(target) = target.filter(|t| *t < len) {
                    self.grid_cursor = target;
                }
            }
            View::Detail => {}
        }
    }

    /// 回车/空格：首页进入分类，网格打开卡片，详情页重读
    pub fn activate(&mut self, now: Instant) {
        match self.view {
            View::Home => {
                let category = Category::ALL[self.home_cursor.min(Category::ALL.len() - 1)];
                self.show_category(category, now);
            }
            View::Grid => self.show_detail(self.grid_cursor, now),
            View::Detail => self.play_audio(now),
        }
    }
}
