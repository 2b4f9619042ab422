use crate::database::models::Sport;
use crate::types::SportType;

/// A venue is a gym when it offers exactly one sport, that sport is not
/// booked in fixed time slots, and it is played individually.
pub fn is_gym(sports: &[Sport]) -> bool {
    match sports {
        [only] => !only.time_bound && only.sport_type == SportType::Single,
        _ => false,
    }
}
