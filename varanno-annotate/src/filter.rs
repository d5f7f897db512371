use fxhash::FxHashMap as HashMap;
use varanno_core::models::{CalledVariant, Interval};

///
/// Keep, for every (chrom, start, end) region, the call with the highest
/// count. Ties go to the call seen first. Regions come back in the order they
/// were first seen.
///
pub fn best_supported<I>(variants: I) -> Vec<CalledVariant>
where
    I: IntoIterator<Item = CalledVariant>,
{
    let mut slots: HashMap<(String, Interval), usize> = HashMap::default();
    let mut best: Vec<CalledVariant> = Vec::new();

    for variant in variants {
        let key = (variant.chrom.clone(), variant.interval);
        match slots.get(&key) {
            Some(&slot) => {
                if variant.count > best[slot].count {
                    best[slot] = variant;
                }
            }
            None => {
                slots.insert(key, best.len());
                best.push(variant);
            }
        }
    }

    best
}
