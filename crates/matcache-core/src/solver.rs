//! Cache-aware inverse computation

use matcache_linalg::{InvertConfig, Inverter};
use ndarray::Array2;
use tracing::{debug, info};

use crate::cache::InverseCache;

/// Returns the inverse of the cache's subject using the default [`InvertConfig`].
///
/// See [`solve_with`].
pub fn solve<'c, T, I>(
    cache: &'c mut InverseCache<T>,
    inverter: &I,
) -> Result<&'c Array2<T>, I::Error>
where
    I: Inverter<T>,
{
    solve_with(cache, inverter, &InvertConfig::default())
}

/// Returns the inverse of the cache's subject, computing it only on a miss.
///
/// On a hit the stored inverse is returned without calling `inverter`, and an
/// `INFO` event with `cache_hit = true` is emitted. On a miss `config` is
/// passed to `inverter` unchanged and the result is stored in the cache
/// before being returned.
///
/// # Errors
///
/// Whatever `inverter` returns, untouched. Nothing is stored on failure, so
/// the next call tries again.
///
/// # Example
///
/// ```
/// use matcache_core::{solve, InverseCache};
/// use matcache_linalg::DenseInverter;
/// use ndarray::array;
///
/// let mut cache = InverseCache::new(array![[2.0, 0.0], [0.0, 4.0]]);
///
/// let first = solve(&mut cache, &DenseInverter)?.clone();
/// let second = solve(&mut cache, &DenseInverter)?;
/// assert_eq!(&first, second);
/// assert_eq!(second, &array![[0.5, 0.0], [0.0, 0.25]]);
/// # Ok::<(), matcache_linalg::LinalgError>(())
/// ```
pub fn solve_with<'c, T, I>(
    cache: &'c mut InverseCache<T>,
    inverter: &I,
    config: &InvertConfig,
) -> Result<&'c Array2<T>, I::Error>
where
    I: Inverter<T>,
{
    let (subject, slot) = cache.slot_mut();
    let (rows, cols) = subject.dim();

    match *slot {
        Some(ref inverse) => {
            info!(cache_hit = true, "Using cached inverse for {}x{} matrix", rows, cols);
            Ok(inverse)
        }
        None => {
            debug!(
                cache_hit = false,
                method = ?config.method,
                "Computing inverse for {}x{} matrix",
                rows,
                cols
            );
            let inverse = inverter.invert(subject, config)?;
            Ok(&*slot.insert(inverse))
        }
    }
}
