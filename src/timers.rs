//! 可取消的一次性定时任务
//!
//! 每种任务同时最多只有一个待触发实例：重复调度同一种任务会替换旧的截止时间，
//! 旧任务不会再触发。

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::encourage::Persona;

/// 定时任务种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// 进入详情页后延迟自动朗读
    Autoplay,
    /// 卡片朗读时的放大脉冲结束
    CardPulse,
    /// 某个人物的鼓励语弹跳结束
    EncouragementBounce(Persona),
    /// 某个人物的鼓励语自动隐藏
    EncouragementHide(Persona),
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: HashMap<TimerKind, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在 `now + delay` 触发 `kind`，覆盖同种旧任务
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration, now: Instant) {
        if self.pending.insert(kind, now + delay).is_some() {
            trace!(?kind, "replaced pending timer");
        }
    }

    /// 取消，返回是否确实有待触发的任务
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.pending.remove(&kind).is_some()
    }

    /// 取出所有到期任务，按截止时间先后排列
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(Instant, TimerKind)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(kind, deadline)| (*deadline, *kind))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        for (_, kind) in &due {
            self.pending.remove(kind);
        }
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(TimerKind::Autoplay, 500 * MS, t0);

        assert!(s.take_due(t0 + 499 * MS).is_empty());
        assert_eq!(s.take_due(t0 + 500 * MS), vec![TimerKind::Autoplay]);
        assert!(s.take_due(t0 + 1000 * MS).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_stale_deadline() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(TimerKind::EncouragementHide(Persona::Dad), 3000 * MS, t0);
        s.schedule(TimerKind::EncouragementHide(Persona::Dad), 3000 * MS, t0 + 2000 * MS);

        assert!(s.take_due(t0 + 3000 * MS).is_empty());
        assert_eq!(
            s.take_due(t0 + 5000 * MS),
            vec![TimerKind::EncouragementHide(Persona::Dad)]
        );
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(TimerKind::Autoplay, 500 * MS, t0);

        assert!(s.cancel(TimerKind::Autoplay));
        assert!(!s.cancel(TimerKind::Autoplay));
        assert!(s.take_due(t0 + 1000 * MS).is_empty());
    }

    #[test]
    fn test_due_in_deadline_order() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(TimerKind::EncouragementHide(Persona::Dad), 300 * MS, t0);
        s.schedule(TimerKind::CardPulse, 200 * MS, t0);
        s.schedule(TimerKind::Autoplay, 100 * MS, t0);

        assert_eq!(
            s.take_due(t0 + 300 * MS),
            vec![
                TimerKind::Autoplay,
                TimerKind::CardPulse,
                TimerKind::EncouragementHide(Persona::Dad)
            ]
        );
        assert!(s.take_due(t0 + 1000 * MS).is_empty());
    }

    #[test]
    fn test_personas_have_separate_timers() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(TimerKind::EncouragementHide(Persona::Dad), 3000 * MS, t0);
        s.schedule(
            TimerKind::EncouragementHide(Persona::Mom),
            3000 * MS,
            t0 + 1000 * MS,
        );

        assert_eq!(
            s.take_due(t0 + 3000 * MS),
            vec![TimerKind::EncouragementHide(Persona::Dad)]
        );
        assert_eq!(
            s.take_due(t0 + 4000 * MS),
            vec![TimerKind::EncouragementHide(Persona::Mom)]
        );
    }
}
