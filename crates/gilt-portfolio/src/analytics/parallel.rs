//! Scheduling of per-holding work.

use crate::types::AnalyticsConfig;

/// Applies `f` to every item, on the rayon pool when
/// [`AnalyticsConfig::should_parallelize`] allows it.
///
/// Results come back in input order either way.
///
/// ```rust
/// use gilt_portfolio::{maybe_parallel_map, AnalyticsConfig};
///
/// let doubled = maybe_parallel_map(&[1, 2, 3], &AnalyticsConfig::default(), |x| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if config.should_parallelize(items.len()) {
        use rayon::prelude::*;
        return items.par_iter().map(f).collect();
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_map() {
        let squares = maybe_parallel_map(&[1, 2, 3, 4], &AnalyticsConfig::sequential(), |x| x * x);
        assert_eq!(squares, vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_order_kept_above_threshold() {
        let items: Vec<u64> = (0..500).collect();
        let config = AnalyticsConfig::new().with_threshold(8);

        let result = maybe_parallel_map(&items, &config, |x| x * 3);
        assert!(result.iter().enumerate().all(|(i, v)| *v == i as u64 * 3));
    }

    #[test]
    fn test_empty_input() {
        let items: [i32; 0] = [];
        assert!(maybe_parallel_map(&items, &AnalyticsConfig::default(), |x| *x).is_empty());
    }
}
