use crate::domain::entities::entity::Entity;

/// Search terms handed to the news/social collaborators for `entity`.
///
/// Never empty. An overflowing ticker is ambiguous across domains, so when a
/// name exists it is used alone.
pub fn research_keywords(entity: &Entity) -> Vec<String> {
    let ticker = entity.ticker().to_string();
    match entity.name() {
        None => vec![ticker],
        Some(name) if entity.is_overflowing() => vec![name.to_string()],
        Some(name) => vec![ticker, name.to_string()],
    }
}
