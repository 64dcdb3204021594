// ==========================================
// 纪念日名单引擎 - 数量截断
// ==========================================
// 规则:
// - 按分组顺序遍历；开始新分组前，若已输出数 ≥ 上限则停止
// - 分组一旦开始即整组输出，最后一组可使总数超过上限
// - 上限缺失或为 0 → 不截断
// ==========================================

// ==========================================
// Limiter - 分组粒度截断
// ==========================================
pub struct Limiter;

impl Limiter {
    /// 截断已排序的分组序列
    ///
    /// # 示例
    /// ```
    /// use celebration_roster::engine::Limiter;
    /// let buckets = vec![("a", vec![1, 2, 3]), ("b", vec![4, 5, 6, 7]), ("c", vec![8, 9])];
    /// let limited = Limiter::apply(buckets, Some(5));
    /// assert_eq!(limited.len(), 2);
    /// assert_eq!(limited.iter().map(|(_, r)| r.len()).sum::<usize>(), 7);
    /// ```
    pub fn apply<K, T>(buckets: Vec<(K, Vec<T>)>, max_count: Option<usize>) -> Vec<(K, Vec<T>)> {
        let Some(max_count) = max_count.filter(|max| *max > 0) else {
            return buckets;
        };

        let mut emitted = 0usize;
        buckets
            .into_iter()
            .take_while(|(_, records)| {
                if emitted >= max_count {
                    return false;
                }
                emitted += records.len();
                true
            })
            .collect()
    }
}
