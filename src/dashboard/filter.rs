use crate::model::MemberRecord;

/// Case-insensitive substring match on the member name. The needle is taken
/// raw: no trimming, an empty needle matches everything.
pub fn name_matches(name: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&search.to_lowercase())
}

/// Matching records with their position in `members`, in dataset order.
pub fn filter_indexed<'a>(
    members: &'a [MemberRecord],
    search: &str,
) -> Vec<(usize, &'a MemberRecord)> {
    if search.is_empty() {
        return members.iter().enumerate().collect();
    }
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| name_matches(&m.name, search))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/dashboard/filter.rs"]
mod tests;
