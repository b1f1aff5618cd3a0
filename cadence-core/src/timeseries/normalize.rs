use crate::Observation;

/// Normalise a provider's observation list into store form.
///
/// - Observations are sorted ascending by period.
/// - On duplicate periods the first occurrence in provider order wins.
///
/// Providers are not trusted to deliver chronological, unique lists; this is
/// applied exactly once when a fetch result enters the observation store.
#[must_use]
pub fn normalize_observations(mut observations: Vec<Observation>) -> Vec<Observation> {
    // Stable sort keeps provider order among equal periods, so dedup keeps the first.
    observations.sort_by_key(|o| o.period);
    observations.dedup_by_key(|o| o.period);
    observations
}

/// True when periods are strictly ascending (sorted and unique).
#[must_use]
pub fn is_normalized(observations: &[Observation]) -> bool {
    observations.windows(2).all(|w| w[0].period < w[1].period)
}
