use crate::models::UserProfile;

/// Profile-independent query for central government schemes
pub const CENTRAL_SECTOR_QUERY: &str = "Central sector scholarship income government";

/// Number of queries produced for every profile
pub const QUERY_COUNT: usize = 4;

/// Build the ordered search queries for a profile
///
/// Several focused queries surface more official pages than one broad query.
/// Order matters: when two queries surface the same URL, the earlier one is
/// recorded as its source.
pub fn build_queries(profile: &UserProfile) -> [String; QUERY_COUNT] {
    let state = &profile.state;

    [
        format!("{} student scholarship government", state),
        format!("{} {} scholarship government", state, profile.category),
        CENTRAL_SECTOR_QUERY.to_string(),
        format!("{} higher education scholarship official", state),
    ]
}
