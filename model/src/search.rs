use crate::User;

/// Case-insensitive substring match of `term` against the user's name.
pub fn matches_search(user: &User, term: &str) -> bool {
    user.name.to_lowercase().contains(&term.to_lowercase())
}

/// Users whose name matches `term`, in their original order.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_search(user, term))
        .collect()
}
