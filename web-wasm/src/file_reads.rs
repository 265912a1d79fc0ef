//! スロットごとのファイル読み込みの世代管理
//!
//! 読み込みは非同期なので、同じスロットで選び直すと古い読み込みが後から
//! 完了することがある。選択のたびに世代を進め、最新の世代の結果だけを反映する。

use c2pa_inspect_common::SlotKey;

/// 読み込み開始時に受け取る世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket {
    slot: SlotKey,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ReadTracker {
    generations: [u64; 2],
}

impl ReadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい選択を記録する（それ以前の読み込みは無効になる）
    pub fn begin(&mut self, slot: SlotKey) -> ReadTicket {
        let generation = &mut self.generations[index(slot)];
        *generation = generation.wrapping_add(1);
        ReadTicket {
            slot,
            generation: *generation,
        }
    }

    /// 読み込み結果を反映してよいか
    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.generations[index(ticket.slot)] == ticket.generation
    }
}

fn index(slot: SlotKey) -> usize {
    match slot {
        SlotKey::Image1 => 0,
        SlotKey::Image2 => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_pick_is_current() {
        let mut reads = ReadTracker::new();
        let ticket = reads.begin(SlotKey::Image1);
        assert!(reads.is_current(ticket));
    }

    #[test]
    fn test_earlier_pick_is_stale_after_repick() {
        let mut reads = ReadTracker::new();
        let large = reads.begin(SlotKey::Image1);
        let small = reads.begin(SlotKey::Image1);

        // 後から選んだ方が先に完了しても、古い方は反映しない
        assert!(reads.is_current(small));
        assert!(!reads.is_current(large));
    }

    #[test]
    fn test_cancel_invalidates_pending_read() {
        let mut reads = ReadTracker::new();
        let pending = reads.begin(SlotKey::Image2);
        let _cancel = reads.begin(SlotKey::Image2);
        assert!(!reads.is_current(pending));
    }

    #[test]
    fn test_slots_are_tracked_independently() {
        let mut reads = ReadTracker::new();
        let first = reads.begin(SlotKey::Image1);
        let second = reads.begin(SlotKey::Image2);
        assert!(reads.is_current(first));
        assert!(reads.is_current(second));
    }
}
