use std::cmp::Ordering;

use crate::entities::{Distance, MapPoint};

/// Ranks `candidates` by great-circle distance to `origin`.
///
/// Candidates without a position are excluded before ranking. The sort is
/// stable, so equally distant candidates keep their original relative
/// order. At most `limit` entries are returned.
pub fn rank_by_distance<T, F>(
    origin: MapPoint,
    candidates: Vec<T>,
    position: F,
    limit: usize,
) -> Vec<(T, Distance)>
where
    F: Fn(&T) -> Option<MapPoint>,
{
    let mut ranked: Vec<_> = candidates
        .into_iter()
        .filter_map(|c| {
            let pos = position(&c)?;
            let distance = origin.distance(pos);
            Some((c, distance))
        })
        .collect();
    ranked.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}
