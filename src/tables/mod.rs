//! Generated mapping tables.
//!
//! Each submodule holds sorted static slices regenerated offline from the
//! JIS / Microsoft reference mappings; lookups are binary searches.

pub mod compose;
pub mod cp932;
pub mod jis0208;
pub mod jis0213;

/// Binary-search lookup in a sorted `(key, value)` slice.
#[inline]
pub(crate) fn lookup<K: Ord + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|i| table[i].1)
}

/// Binary-search lookup in a sorted `(key1, key2, value)` slice.
#[inline]
pub(crate) fn lookup2<K: Ord + Copy, V: Copy>(table: &[(K, K, V)], a: K, b: K) -> Option<V> {
    table
        .binary_search_by_key(&(a, b), |&(k1, k2, _)| (k1, k2))
        .ok()
        .map(|i| table[i].2)
}

/// Canonically composes `base` + `mark` if the pair has a primary composite.
#[inline]
pub(crate) fn compose(base: u16, mark: u16) -> Option<u16> {
    lookup2(compose::COMPOSE, base, mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<K: Ord + Copy, V>(table: &[(K, V)], key: fn(&(K, V)) -> K) -> bool {
        table.windows(2).all(|w| key(&w[0]) < key(&w[1]))
    }

    #[test]
    fn tables_are_sorted_for_binary_search() {
        assert!(is_sorted(jis0208::DECODE, |e| e.0));
        assert!(is_sorted(jis0208::ENCODE, |e| e.0));
        assert!(is_sorted(cp932::DECODE, |e| e.0));
        assert!(is_sorted(cp932::ENCODE, |e| e.0));
        assert!(is_sorted(jis0213::DECODE, |e| e.0));
        assert!(is_sorted(jis0213::ENCODE, |e| e.0));
        assert!(jis0213::DECODE_SEQ.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(jis0213::ENCODE_SEQ
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
        assert!(compose::COMPOSE
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
    }

    #[test]
    fn spot_lookups() {
        assert_eq!(lookup(jis0208::DECODE, 0x8140), Some(0x3000));
        assert_eq!(lookup(jis0208::ENCODE, 0x3042), Some(0x82A0));
        assert_eq!(lookup(cp932::ENCODE, 0xFF5E), Some(0x8160));
        assert_eq!(lookup(jis0213::DECODE, 0xF040), Some(0x20089));
        assert_eq!(compose(0x304B, 0x3099), Some(0x304C));
        assert_eq!(compose(0x3042, 0x3099), None);
    }
}
