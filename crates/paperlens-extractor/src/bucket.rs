//! Bucketing of extracted entities into the three display sets
//!
//! PERSON spans become authors, ORG spans become organizations, and
//! WORK_OF_ART / MISC spans become citations. Every other label is
//! discarded. Sets deduplicate by literal entity text.

use crate::ExtractedEntity;
use paperlens_core::EntityBuckets;

/// Bucket extracted entities by their label's category
pub fn bucket_entities(entities: &[ExtractedEntity]) -> EntityBuckets {
    let mut buckets = EntityBuckets::new();

    for entity in entities {
        buckets.insert(entity.label, entity.text.clone());
    }

    buckets
}
