/// Invert a mapping by swapping keys and values
///
/// Later pairs win when values repeat, so comparing lengths before and after detects duplicates.
pub fn invert_map<K, V, MK, MV>(original: MK) -> MV
where
    MK: IntoIterator<Item = (K, V)>,
    MV: FromIterator<(V, K)>,
{
    original
        .into_iter()
        .map(|(key, value)| (value, key))
        .collect()
}
