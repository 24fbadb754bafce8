//! Overlap resolution for PII candidates
//!
//! Pattern and NER passes both run over the full text, so the same span
//! is frequently claimed more than once. Resolution keeps one entity
//! per overlapping region: a candidate with strictly higher confidence
//! evicts the entity it first overlaps, anything else is discarded.
//! Ties keep the earlier entity, which makes pattern table order
//! significant.

use compliance_types::PiiEntity;

/// Resolve overlapping candidates down to a non-overlapping set.
///
/// The result is sorted by start offset. Each candidate is compared
/// against the first already-kept entity it overlaps; later overlaps
/// are not consulted.
pub fn deduplicate_entities(mut entities: Vec<PiiEntity>) -> Vec<PiiEntity> {
    if entities.is_empty() {
        return entities;
    }

    entities.sort_by_key(|e| (e.start, e.end));

    let mut kept: Vec<PiiEntity> = Vec::new();
    for candidate in entities {
        let mut discard = false;
        let mut evict: Option<usize> = None;

        for (idx, existing) in kept.iter().enumerate() {
            if candidate.overlaps(existing) {
                if candidate.confidence > existing.confidence {
                    evict = Some(idx);
                } else {
                    discard = true;
                }
                break;
            }
        }

        if discard {
            continue;
        }
        if let Some(idx) = evict {
            kept.remove(idx);
        }
        kept.push(candidate);
    }

    kept.sort_by_key(|e| e.start);
    kept
}
