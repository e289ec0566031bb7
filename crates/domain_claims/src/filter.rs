//! Claim search and type filtering

use crate::claim::Claim;

/// Filters claims by a free-text search term and an optional type filter.
///
/// A claim matches the term when its type, decimal id rendering, or
/// description contains it case-insensitively (id matching uses the raw
/// term, since digits have no case). `type_filter` of `None` means "all";
/// otherwise the claim's type must equal the filter case-insensitively.
pub fn filter_claims<'a>(
    claims: &'a [Claim],
    search_term: &str,
    type_filter: Option<&str>,
) -> Vec<&'a Claim> {
    let term = search_term.to_lowercase();
    claims
        .iter()
        .filter(|claim| {
            let matches_search = claim.claim_type.to_lowercase().contains(&term)
                || claim.id.to_string().contains(search_term)
                || claim.description.to_lowercase().contains(&term);
            let matches_type = match type_filter {
                None => true,
                Some(filter) => claim.claim_type.eq_ignore_ascii_case(filter),
            };
            matches_search && matches_type
        })
        .collect()
}

/// Distinct lower-cased claim types in first-seen order, prefixed by "all".
///
/// Feeds the type-filter dropdown in the claim-history view.
pub fn claim_type_options(claims: &[Claim]) -> Vec<String> {
    let mut options = vec!["all".to_string()];
    for claim in claims {
        let lowered = claim.claim_type.to_lowercase();
        if !options.contains(&lowered) {
            options.push(lowered);
        }
    }
    options
}
