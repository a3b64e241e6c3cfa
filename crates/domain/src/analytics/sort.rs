// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::RaceResultRow;

/// 順位の比較。着順なしは最後に並ぶ
#[inline]
pub fn compare_positions(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// シーズン内の並び順: ラウンド昇順、次に順位昇順
pub fn season_order(a: &RaceResultRow, b: &RaceResultRow) -> Ordering {
    a.round.cmp(&b.round).then_with(|| compare_positions(a.position, b.position))
}

/// 合計値の降順、同値なら名前の昇順
#[inline]
pub fn by_total_desc(a_total: f64, a_name: &str, b_total: f64, b_name: &str) -> Ordering {
    b_total.total_cmp(&a_total).then_with(|| a_name.cmp(b_name))
}
